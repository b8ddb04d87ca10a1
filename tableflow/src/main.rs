use tableflow::{Config, TableStore, init_logger_with_file};
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 与配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 初始化日志
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(
        work_dir = %config.work_dir,
        db = %config.db_path().display(),
        key = %config.storage_key,
        "TableFlow starting..."
    );

    // 3. 打开存储并恢复状态
    let store = TableStore::open_with_config(&config)?;
    let summary = store.summary();
    match store.table() {
        Some(table) => tracing::info!(
            shape = ?table.shape,
            seats = table.seats,
            active = summary.guests_active,
            all_served = summary.guests_all_served,
            paid = summary.guests_paid,
            open_items = summary.open_items(),
            "Table session restored"
        ),
        None => tracing::info!("No table session, waiting for create_table"),
    }

    // 4. 记录后续变更直到退出
    let mut changes = store.watch();
    let watcher = tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(state) => {
                    let summary = state.summary();
                    tracing::info!(
                        has_table = state.has_table(),
                        total_items = summary.total_items(),
                        "Table state changed"
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "State watcher lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    watcher.abort();

    Ok(())
}
