//! ResetTable command handler

use crate::tables::traits::{CommandHandler, TableResult};
use shared::AppState;

/// ResetTable action - discards the table entirely
#[derive(Debug, Clone)]
pub struct ResetTableAction;

impl CommandHandler for ResetTableAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        if !state.has_table() {
            return Ok(None);
        }
        tracing::info!("Resetting table");
        Ok(Some(AppState::default()))
    }
}
