//! Persisted application state
//!
//! The whole session is one optional table. `AppState` is what the store
//! publishes to observers and what the persistence adapter writes.

use serde::{Deserialize, Serialize};

use crate::models::{GuestStatus, OrderItemStatus, Table};

/// Root state: at most one table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    pub table: Option<Table>,
}

impl AppState {
    pub fn new(table: Option<Table>) -> Self {
        Self { table }
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Status counts over the current table, all zero when there is none
    pub fn summary(&self) -> TableSummary {
        let mut summary = TableSummary::default();
        let Some(table) = &self.table else {
            return summary;
        };

        summary.seats = table.seats;
        for guest in &table.guests {
            match guest.status {
                GuestStatus::Active => summary.guests_active += 1,
                GuestStatus::AllServed => summary.guests_all_served += 1,
                GuestStatus::Paid => summary.guests_paid += 1,
            }
        }

        let items = table
            .guests
            .iter()
            .flat_map(|g| g.orders.iter())
            .chain(table.common_order.iter());
        for item in items {
            match item.status {
                OrderItemStatus::Ordered => summary.items_ordered += 1,
                OrderItemStatus::Preparing => summary.items_preparing += 1,
                OrderItemStatus::Served => summary.items_served += 1,
                OrderItemStatus::Canceled => summary.items_canceled += 1,
            }
        }
        summary.common_items = table.common_order.len();
        summary
    }
}

/// Aggregated counts for list and badge views
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSummary {
    pub seats: u32,
    pub guests_active: usize,
    pub guests_all_served: usize,
    pub guests_paid: usize,
    /// Counts include both guest and common items
    pub items_ordered: usize,
    pub items_preparing: usize,
    pub items_served: usize,
    pub items_canceled: usize,
    pub common_items: usize,
}

impl TableSummary {
    pub fn total_items(&self) -> usize {
        self.items_ordered + self.items_preparing + self.items_served + self.items_canceled
    }

    /// Items still waiting on the kitchen
    pub fn open_items(&self) -> usize {
        self.items_ordered + self.items_preparing
    }
}
