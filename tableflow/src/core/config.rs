use std::path::PathBuf;

use crate::tables::storage::DEFAULT_STORAGE_KEY;

/// 运行配置 - 存储位置与日志选项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 |
/// | DB_FILE | tableflow.redb | 数据库文件名 |
/// | STORAGE_KEY | tableflow-storage | 状态槽位键名 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志格式 |
/// | LOG_DIR | (未设置) | 按天滚动的日志目录 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/tableflow LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放数据库文件
    pub work_dir: String,
    /// 数据库文件名 (相对 work_dir)
    pub db_file: String,
    /// 持久化槽位键名
    pub storage_key: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 文件日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "tableflow.redb".into()),
            storage_key: std::env::var("STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// 数据库文件完整路径
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
