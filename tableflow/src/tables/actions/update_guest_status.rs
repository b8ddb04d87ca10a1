//! UpdateGuestStatus command handler
//!
//! Manual override: sets the guest status regardless of its items.

use crate::tables::actions::{with_table, working_copy};
use crate::tables::traits::{CommandHandler, TableResult};
use shared::{AppState, GuestStatus};

/// UpdateGuestStatus action
#[derive(Debug, Clone)]
pub struct UpdateGuestStatusAction {
    pub guest_id: u32,
    pub status: GuestStatus,
}

impl CommandHandler for UpdateGuestStatusAction {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>> {
        let Some(mut table) = working_copy(state) else {
            return Ok(None);
        };
        let Some(guest) = table.guest_mut(self.guest_id) else {
            return Ok(None);
        };

        guest.status = self.status;
        with_table(table)
    }
}
