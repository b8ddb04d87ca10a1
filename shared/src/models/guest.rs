//! Guest Model

use super::order_item::OrderItem;
use serde::{Deserialize, Serialize};

/// Guest status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    /// Still ordering or waiting for dishes
    #[default]
    Active,
    /// Every ordered item is served or canceled
    AllServed,
    Paid,
}

impl GuestStatus {
    pub const ALL: [GuestStatus; 3] = [
        GuestStatus::Active,
        GuestStatus::AllServed,
        GuestStatus::Paid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GuestStatus::Active => "active",
            GuestStatus::AllServed => "all_served",
            GuestStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guest gender, used only for display iconography
///
/// New guests start as `Female`. Data written before the field existed
/// decodes with the same default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GuestGender {
    Male,
    #[default]
    Female,
    Other,
}

/// One seat occupant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    /// Seat position, 1-based
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub gender: GuestGender,
    pub status: GuestStatus,
    /// Insertion order is preserved
    #[serde(default)]
    pub orders: Vec<OrderItem>,
}

impl Guest {
    /// Guest with default fields for the given seat
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: Self::default_name(id),
            gender: GuestGender::default(),
            status: GuestStatus::Active,
            orders: Vec::new(),
        }
    }

    pub fn default_name(id: u32) -> String {
        format!("Guest {id}")
    }

    /// Non-empty order list with every item served or canceled
    pub fn all_items_resolved(&self) -> bool {
        !self.orders.is_empty() && self.orders.iter().all(|item| item.status.is_resolved())
    }

    pub fn find_item(&self, item_id: &str) -> Option<&OrderItem> {
        self.orders.iter().find(|item| item.id == item_id)
    }
}

/// Partial guest update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GuestGender>,
}

impl GuestDetails {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            gender: None,
        }
    }

    pub fn gender(gender: GuestGender) -> Self {
        Self {
            name: None,
            gender: Some(gender),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.gender.is_none()
    }
}
