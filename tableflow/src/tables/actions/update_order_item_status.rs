//! UpdateOrderItemStatus command handler
//!
//! Sets the status of one guest item, then re-evaluates the guest:
//! an `Active` guest whose (post-update) order list is non-empty and fully
//! served or canceled becomes `AllServed`. The promotion never runs in
//! reverse and never overrides `Paid`.

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::{AppState, GuestStatus, OrderItemStatus};

/// UpdateOrderItemStatus action
#[derive(Debug, Clone)]
pub struct UpdateOrderItemStatusAction {
    pub guest_id: u32,
    pub item_id: String,
    pub status: OrderItemStatus,
}

impl CommandHandler for UpdateOrderItemStatusAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(guest) = table.guest_mut(self.guest_id) else {
            return Ok(None);
        };
        let Some(item) = guest.orders.iter_mut().find(|i| i.id == self.item_id) else {
            return Ok(None);
        };

        item.status = self.status;

        if guest.status == GuestStatus::Active && guest.all_items_resolved() {
            tracing::debug!(guest_id = guest.id, "All items resolved, guest marked all_served");
            guest.status = GuestStatus::AllServed;
        }

        with_table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::actions::test_fixtures::{item, state_with_table, table};

    fn state_with_orders(statuses: &[OrderItemStatus], guest_status: GuestStatus) -> AppState {
        let mut state = state_with_table(2);
        let guest = &mut state.table.as_mut().unwrap().guests[0];
        guest.status = guest_status;
        for (i, status) in statuses.iter().enumerate() {
            guest.orders.push(item(&format!("i{i}"), "Dish", *status));
        }
        state
    }

    fn set(state: &AppState, item_id: &str, status: OrderItemStatus) -> AppState {
        let action = UpdateOrderItemStatusAction {
            guest_id: 1,
            item_id: item_id.to_string(),
            status,
        };
        action.execute(state).unwrap().unwrap()
    }

    fn guest_status(state: &AppState) -> GuestStatus {
        state.table.as_ref().unwrap().guests[0].status
    }

    #[test]
    fn test_both_served_promotes_guest() {
        let state = state_with_orders(
            &[OrderItemStatus::Ordered, OrderItemStatus::Ordered],
            GuestStatus::Active,
        );
        let state = set(&state, "i0", OrderItemStatus::Served);
        assert_eq!(guest_status(&state), GuestStatus::Active);
        let state = set(&state, "i1", OrderItemStatus::Served);
        assert_eq!(guest_status(&state), GuestStatus::AllServed);
    }

    #[test]
    fn test_one_open_item_keeps_guest_active() {
        let state = state_with_orders(
            &[OrderItemStatus::Served, OrderItemStatus::Preparing],
            GuestStatus::Active,
        );
        let state = set(&state, "i1", OrderItemStatus::Ordered);
        assert_eq!(guest_status(&state), GuestStatus::Active);
    }

    #[test]
    fn test_both_canceled_promotes_guest() {
        let state = state_with_orders(
            &[OrderItemStatus::Canceled, OrderItemStatus::Ordered],
            GuestStatus::Active,
        );
        let state = set(&state, "i1", OrderItemStatus::Canceled);
        assert_eq!(guest_status(&state), GuestStatus::AllServed);
    }

    #[test]
    fn test_paid_guest_is_not_overridden() {
        let state = state_with_orders(
            &[OrderItemStatus::Served, OrderItemStatus::Ordered],
            GuestStatus::Paid,
        );
        let state = set(&state, "i1", OrderItemStatus::Served);
        assert_eq!(guest_status(&state), GuestStatus::Paid);
    }

    #[test]
    fn test_reopening_item_does_not_demote_guest() {
        let state = state_with_orders(&[OrderItemStatus::Served], GuestStatus::AllServed);
        let state = set(&state, "i0", OrderItemStatus::Preparing);
        assert_eq!(guest_status(&state), GuestStatus::AllServed);
        assert_eq!(
            table(&Some(state)).guests[0].orders[0].status,
            OrderItemStatus::Preparing
        );
    }

    #[test]
    fn test_unknown_item_is_noop() {
        let state = state_with_orders(&[OrderItemStatus::Ordered], GuestStatus::Active);
        let action = UpdateOrderItemStatusAction {
            guest_id: 1,
            item_id: "missing".to_string(),
            status: OrderItemStatus::Served,
        };
        assert_eq!(action.execute(&state).unwrap(), None);
    }

    #[test]
    fn test_item_of_other_guest_is_not_found() {
        let state = state_with_orders(&[OrderItemStatus::Ordered], GuestStatus::Active);
        let action = UpdateOrderItemStatusAction {
            guest_id: 2,
            item_id: "i0".to_string(),
            status: OrderItemStatus::Served,
        };
        assert_eq!(action.execute(&state).unwrap(), None);
    }
}
