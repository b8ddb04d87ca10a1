//! Shared types for TableFlow
//!
//! Domain model of a single restaurant table session (table, guests,
//! order items), the command vocabulary understood by the table store and
//! the response types it returns.

pub mod app_state;
pub mod command;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use app_state::{AppState, TableSummary};
pub use command::TableCommand;
pub use models::{
    Guest, GuestDetails, GuestGender, GuestStatus, MAX_SEATS, MIN_SEATS, OrderItem,
    OrderItemStatus, Table, TableInvariantError, TableShape,
};
pub use response::{CommandError, CommandErrorCode, CommandResponse};
pub use serde::{Deserialize, Serialize};
