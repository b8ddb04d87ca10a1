//! AddCommonOrderItem command handler

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use crate::utils::validation::validate_item_name;
use shared::util::generate_item_id;
use shared::{AppState, OrderItem};

/// AddCommonOrderItem action - appends an item shared by the whole table
#[derive(Debug, Clone)]
pub struct AddCommonOrderItemAction {
    pub name: String,
}

impl CommandHandler for AddCommonOrderItemAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let name = validate_item_name(&self.name)?;

        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };

        let id = generate_item_id(&table.common_order);
        table.common_order.push(OrderItem::new(id, name));

        with_table(table)
    }
}
