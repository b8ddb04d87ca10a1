//! Table commands - requests from the view layer to change the table

use crate::models::{GuestDetails, GuestStatus, OrderItemStatus, TableShape};
use serde::{Deserialize, Serialize};

/// Every mutation the table store accepts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableCommand {
    // ========== Lifecycle ==========
    CreateTable {
        shape: TableShape,
        seats: u32,
    },
    ResetTable,

    // ========== Guest orders ==========
    AddOrderItem {
        guest_id: u32,
        name: String,
    },
    UpdateOrderItemStatus {
        guest_id: u32,
        item_id: String,
        status: OrderItemStatus,
    },
    RemoveOrderItem {
        guest_id: u32,
        item_id: String,
    },

    // ========== Guests ==========
    UpdateGuestStatus {
        guest_id: u32,
        status: GuestStatus,
    },
    UpdateGuestDetails {
        guest_id: u32,
        details: GuestDetails,
    },

    // ========== Common order ==========
    AddCommonOrderItem {
        name: String,
    },
    UpdateCommonOrderItemStatus {
        item_id: String,
        status: OrderItemStatus,
    },
    RemoveCommonOrderItem {
        item_id: String,
    },
}

impl TableCommand {
    /// Stable name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            TableCommand::CreateTable { .. } => "CREATE_TABLE",
            TableCommand::ResetTable => "RESET_TABLE",
            TableCommand::AddOrderItem { .. } => "ADD_ORDER_ITEM",
            TableCommand::UpdateOrderItemStatus { .. } => "UPDATE_ORDER_ITEM_STATUS",
            TableCommand::RemoveOrderItem { .. } => "REMOVE_ORDER_ITEM",
            TableCommand::UpdateGuestStatus { .. } => "UPDATE_GUEST_STATUS",
            TableCommand::UpdateGuestDetails { .. } => "UPDATE_GUEST_DETAILS",
            TableCommand::AddCommonOrderItem { .. } => "ADD_COMMON_ORDER_ITEM",
            TableCommand::UpdateCommonOrderItemStatus { .. } => "UPDATE_COMMON_ORDER_ITEM_STATUS",
            TableCommand::RemoveCommonOrderItem { .. } => "REMOVE_COMMON_ORDER_ITEM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tag_matches_kind() {
        let commands = vec![
            TableCommand::CreateTable {
                shape: TableShape::Round,
                seats: 4,
            },
            TableCommand::ResetTable,
            TableCommand::AddOrderItem {
                guest_id: 1,
                name: "Soup".to_string(),
            },
            TableCommand::UpdateCommonOrderItemStatus {
                item_id: "x".to_string(),
                status: OrderItemStatus::Served,
            },
        ];
        for cmd in commands {
            let value = serde_json::to_value(&cmd).unwrap();
            assert_eq!(value["type"], cmd.kind());
        }
    }

    #[test]
    fn test_command_decodes_from_view_payload() {
        let json = r#"{"type":"UPDATE_GUEST_DETAILS","guest_id":2,"details":{"name":"Olga"}}"#;
        let cmd: TableCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            TableCommand::UpdateGuestDetails {
                guest_id: 2,
                details: GuestDetails::name("Olga"),
            }
        );
    }
}
