//! UpdateCommonOrderItemStatus command handler
//!
//! Common items have no owning guest, so no guest status is re-evaluated.

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::{AppState, OrderItemStatus};

/// UpdateCommonOrderItemStatus action
#[derive(Debug, Clone)]
pub struct UpdateCommonOrderItemStatusAction {
    pub item_id: String,
    pub status: OrderItemStatus,
}

impl CommandHandler for UpdateCommonOrderItemStatusAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(item) = table
            .common_order
            .iter_mut()
            .find(|i| i.id == self.item_id)
        else {
            return Ok(None);
        };

        item.status = self.status;
        with_table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::actions::test_fixtures::{item, state_with_table, table};
    use shared::GuestStatus;

    fn state_with_common() -> AppState {
        let mut state = state_with_table(2);
        let t = state.table.as_mut().unwrap();
        t.common_order.push(item("c1", "Bread", OrderItemStatus::Ordered));
        t.common_order.push(item("c2", "Wine", OrderItemStatus::Ordered));
        state
    }

    #[test]
    fn test_update_common_status() {
        let action = UpdateCommonOrderItemStatusAction {
            item_id: "c2".to_string(),
            status: OrderItemStatus::Served,
        };
        let next = action.execute(&state_with_common()).unwrap();
        let t = table(&next);
        assert_eq!(t.common_order[0].status, OrderItemStatus::Ordered);
        assert_eq!(t.common_order[1].status, OrderItemStatus::Served);
        assert!(t.guests.iter().all(|g| g.status == GuestStatus::Active));
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let action = UpdateCommonOrderItemStatusAction {
            item_id: "c9".to_string(),
            status: OrderItemStatus::Canceled,
        };
        assert_eq!(action.execute(&state_with_common()).unwrap(), None);
    }
}
