//! Table store module
//!
//! - **manager**: `TableStore`, the owner of the current snapshot
//! - **actions**: one pure command handler per mutation
//! - **storage**: redb-backed persistence of the state slot
//! - **subscription**: synchronous change listeners
//!
//! # Command Flow
//!
//! ```text
//! TableCommand → CommandAction::execute(&snapshot) → next AppState
//!                                                       ├─ unchanged? → done
//!                                                       ├─ swap snapshot
//!                                                       ├─ StateStorage::save
//!                                                       └─ notify listeners + watchers
//! ```

// traits first: enum_dispatch sees the trait before CommandAction
pub mod traits;

pub mod actions;
pub mod manager;
pub mod storage;
pub mod subscription;

// Re-exports
pub use actions::CommandAction;
pub use manager::{ManagerError, ManagerResult, TableStore};
pub use storage::{PersistedState, RedbStorage, StateStorage, StorageError, StorageResult};
pub use subscription::{SubscriptionId, SubscriptionRegistry};
pub use traits::{CommandHandler, TableError, TableResult};
