//! RemoveCommonOrderItem command handler

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::AppState;

/// RemoveCommonOrderItem action
#[derive(Debug, Clone)]
pub struct RemoveCommonOrderItemAction {
    pub item_id: String,
}

impl CommandHandler for RemoveCommonOrderItemAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(pos) = table
            .common_order
            .iter()
            .position(|i| i.id == self.item_id)
        else {
            return Ok(None);
        };

        table.common_order.remove(pos);
        with_table(table)
    }
}
