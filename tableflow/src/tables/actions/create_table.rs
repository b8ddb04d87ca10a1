//! CreateTable command handler
//!
//! Replaces any existing table with a fresh one: guests `1..=seats` with
//! default fields and an empty common order.

use crate::tables::actions::with_table;
use crate::tables::traits::{CommandHandler, TableResult};
use crate::utils::validation::validate_seat_count;
use shared::{AppState, Table, TableShape};

/// CreateTable action
#[derive(Debug, Clone)]
pub struct CreateTableAction {
    pub shape: TableShape,
    pub seats: u32,
}

impl CommandHandler for CreateTableAction {
    fn execute(&self, _state: &AppState) -> TableResult<Option<AppState>> {
        let seats = validate_seat_count(self.seats)?;
        tracing::info!(shape = ?self.shape, seats, "Creating table");
        with_table(Table::new(self.shape, seats))
    }
}
