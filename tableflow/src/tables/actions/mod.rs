//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type. Actions are PURE functions of the
//! current snapshot.

use enum_dispatch::enum_dispatch;

use crate::tables::traits::{CommandHandler, TableResult};
use shared::{AppState, TableCommand};

mod add_common_order_item;
mod add_order_item;
mod create_table;
mod remove_common_order_item;
mod remove_order_item;
mod reset_table;
mod update_common_order_item_status;
mod update_guest_details;
mod update_guest_status;
mod update_order_item_status;

pub use add_common_order_item::AddCommonOrderItemAction;
pub use add_order_item::AddOrderItemAction;
pub use create_table::CreateTableAction;
pub use remove_common_order_item::RemoveCommonOrderItemAction;
pub use remove_order_item::RemoveOrderItemAction;
pub use reset_table::ResetTableAction;
pub use update_common_order_item_status::UpdateCommonOrderItemStatusAction;
pub use update_guest_details::UpdateGuestDetailsAction;
pub use update_guest_status::UpdateGuestStatusAction;
pub use update_order_item_status::UpdateOrderItemStatusAction;

/// CommandAction enum - dispatches to concrete action implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(CommandHandler)]
#[derive(Debug, Clone)]
pub enum CommandAction {
    CreateTable(CreateTableAction),
    ResetTable(ResetTableAction),
    AddOrderItem(AddOrderItemAction),
    UpdateOrderItemStatus(UpdateOrderItemStatusAction),
    RemoveOrderItem(RemoveOrderItemAction),
    UpdateGuestStatus(UpdateGuestStatusAction),
    UpdateGuestDetails(UpdateGuestDetailsAction),
    AddCommonOrderItem(AddCommonOrderItemAction),
    UpdateCommonOrderItemStatus(UpdateCommonOrderItemStatusAction),
    RemoveCommonOrderItem(RemoveCommonOrderItemAction),
}

/// Convert TableCommand to CommandAction
///
/// This is the ONLY place with a match on TableCommand.
impl From<TableCommand> for CommandAction {
    fn from(cmd: TableCommand) -> Self {
        match cmd {
            TableCommand::CreateTable { shape, seats } => {
                CommandAction::CreateTable(CreateTableAction { shape, seats })
            }
            TableCommand::ResetTable => CommandAction::ResetTable(ResetTableAction),
            TableCommand::AddOrderItem { guest_id, name } => {
                CommandAction::AddOrderItem(AddOrderItemAction { guest_id, name })
            }
            TableCommand::UpdateOrderItemStatus {
                guest_id,
                item_id,
                status,
            } => CommandAction::UpdateOrderItemStatus(UpdateOrderItemStatusAction {
                guest_id,
                item_id,
                status,
            }),
            TableCommand::RemoveOrderItem { guest_id, item_id } => {
                CommandAction::RemoveOrderItem(RemoveOrderItemAction { guest_id, item_id })
            }
            TableCommand::UpdateGuestStatus { guest_id, status } => {
                CommandAction::UpdateGuestStatus(UpdateGuestStatusAction { guest_id, status })
            }
            TableCommand::UpdateGuestDetails { guest_id, details } => {
                CommandAction::UpdateGuestDetails(UpdateGuestDetailsAction { guest_id, details })
            }
            TableCommand::AddCommonOrderItem { name } => {
                CommandAction::AddCommonOrderItem(AddCommonOrderItemAction { name })
            }
            TableCommand::UpdateCommonOrderItemStatus { item_id, status } => {
                CommandAction::UpdateCommonOrderItemStatus(UpdateCommonOrderItemStatusAction {
                    item_id,
                    status,
                })
            }
            TableCommand::RemoveCommonOrderItem { item_id } => {
                CommandAction::RemoveCommonOrderItem(RemoveCommonOrderItemAction { item_id })
            }
        }
    }
}

/// Clone the current table for modification, `None` when there is no table
pub(crate) fn working_copy(state: &AppState) -> Option<shared::Table> {
    state.table.clone()
}

/// Wrap a modified table into a new root state
pub(crate) fn with_table(table: shared::Table) -> TableResult<Option<AppState>> {
    Ok(Some(AppState::new(Some(table))))
}
