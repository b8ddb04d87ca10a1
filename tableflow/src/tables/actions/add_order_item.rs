//! AddOrderItem command handler
//!
//! Appends a freshly ordered item to one guest's order list.
//! Adding never changes the guest status.

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use crate::utils::validation::validate_item_name;
use shared::util::generate_item_id;
use shared::{AppState, OrderItem};

/// AddOrderItem action
#[derive(Debug, Clone)]
pub struct AddOrderItemAction {
    pub guest_id: u32,
    pub name: String,
}

impl CommandHandler for AddOrderItemAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let name = validate_item_name(&self.name)?;

        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(guest) = table.guest_mut(self.guest_id) else {
            return Ok(None);
        };

        let id = generate_item_id(&guest.orders);
        guest.orders.push(OrderItem::new(id, name));

        with_table(table)
    }
}
