use crate::models::OrderItem;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an order item id that does not clash with any id in `existing`.
///
/// UUID v4, so two items created within the same millisecond still get
/// distinct ids.
pub fn generate_item_id(existing: &[OrderItem]) -> String {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !existing.iter().any(|item| item.id == id) {
            return id;
        }
    }
}
