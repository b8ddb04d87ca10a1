//! Order Item Model

use serde::{Deserialize, Serialize};

/// Order item status
///
/// Flat enum: any status may be set from any other. `Served` and `Canceled`
/// both count as resolved for the guest auto-transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderItemStatus {
    #[default]
    Ordered,
    Preparing,
    Served,
    Canceled,
}

impl OrderItemStatus {
    pub const ALL: [OrderItemStatus; 4] = [
        OrderItemStatus::Ordered,
        OrderItemStatus::Preparing,
        OrderItemStatus::Served,
        OrderItemStatus::Canceled,
    ];

    /// Whether the item no longer needs attention from the kitchen
    pub fn is_resolved(self) -> bool {
        matches!(self, OrderItemStatus::Served | OrderItemStatus::Canceled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderItemStatus::Ordered => "ordered",
            OrderItemStatus::Preparing => "preparing",
            OrderItemStatus::Served => "served",
            OrderItemStatus::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for OrderItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered dish or product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Unique within the owning list
    pub id: String,
    /// Display name (stored trimmed)
    pub name: String,
    pub status: OrderItemStatus,
}

impl OrderItem {
    /// Create a freshly ordered item. The name is trimmed.
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.trim().to_string(),
            status: OrderItemStatus::Ordered,
        }
    }
}
