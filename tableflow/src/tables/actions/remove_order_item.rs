//! RemoveOrderItem command handler

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::AppState;

/// RemoveOrderItem action
///
/// Removal leaves the guest status as it is, even when the remaining
/// items are all resolved.
#[derive(Debug, Clone)]
pub struct RemoveOrderItemAction {
    pub guest_id: u32,
    pub item_id: String,
}

impl CommandHandler for RemoveOrderItemAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(guest) = table.guest_mut(self.guest_id) else {
            return Ok(None);
        };
        let Some(pos) = guest.orders.iter().position(|i| i.id == self.item_id) else {
            return Ok(None);
        };

        guest.orders.remove(pos);
        with_table(table)
    }
}
