//! Core traits for table commands

use enum_dispatch::enum_dispatch;
use shared::AppState;
use thiserror::Error;

/// Rejection of a command because of invalid input
///
/// Unknown guests or items are not errors; they make the command a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Invalid seat count: {seats} (allowed {min}..={max})")]
    InvalidSeatCount { seats: u32, min: u32, max: u32 },

    #[error("Item name must not be empty")]
    EmptyItemName,
}

pub type TableResult<T> = Result<T, TableError>;

/// A command that computes the next state from the current one
///
/// Handlers are pure: they never touch storage or subscribers.
/// `Ok(None)` means the command does not apply (no table, unknown guest
/// or item) and the state stays as it is.
#[enum_dispatch]
pub trait CommandHandler {
    fn execute(&self, state: &AppState) -> TableResult<Option<AppState>>;
}
