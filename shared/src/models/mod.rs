//! Data models
//!
//! Plain data shapes of the table session. Mutation rules live in the
//! table store; these types only carry state and simple lookups.

pub mod guest;
pub mod order_item;
pub mod table;

pub use guest::{Guest, GuestDetails, GuestGender, GuestStatus};
pub use order_item::{OrderItem, OrderItemStatus};
pub use table::{MAX_SEATS, MIN_SEATS, Table, TableInvariantError, TableShape};
