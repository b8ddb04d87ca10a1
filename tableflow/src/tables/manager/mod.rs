//! TableStore - owner of the table session state
//!
//! This module handles:
//! - Restoring the state slot at startup
//! - Command validation and processing
//! - Atomic snapshot replacement
//! - Persistence after every change
//! - Change notification (listeners and broadcast watchers)
//!
//! # Command Flow
//!
//! ```text
//! execute(cmd)
//!     ├─ 1. Convert command to action
//!     ├─ 2. Take the write lock
//!     ├─ 3. Compute next state from the current snapshot
//!     ├─ 4. No-op or identical state → return unchanged
//!     ├─ 5. Swap snapshot
//!     ├─ 6. Persist (failure → warning, state kept)
//!     ├─ 7. Release the lock
//!     ├─ 8. Notify listeners and watchers
//!     └─ 9. Return response
//! ```
//!
//! Every swap bumps a revision. A fan-out stops as soon as a newer revision
//! exists (for example, a listener issued another command), so the last
//! snapshot any observer receives is always the current one.

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::storage::{RedbStorage, StateStorage};
use super::subscription::{SubscriptionId, SubscriptionRegistry};
use super::traits::{CommandHandler, TableResult};
use crate::core::Config;
use parking_lot::{ReentrantMutex, RwLock};
use shared::{
    AppState, CommandError, CommandResponse, Guest, GuestDetails, GuestStatus, OrderItemStatus,
    Table, TableCommand, TableShape, TableSummary,
};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

/// Watch channel capacity; slow watchers skip to newer snapshots
const WATCH_CHANNEL_CAPACITY: usize = 64;

/// TableStore for command processing
///
/// One instance per application. Share it by `Arc`; every method takes
/// `&self`.
pub struct TableStore {
    state: RwLock<Arc<AppState>>,
    /// Bumped on every swap, under the state write lock
    revision: AtomicU64,
    /// Serialises fan-outs; re-entrant so listeners can issue commands
    publish_lock: ReentrantMutex<()>,
    storage: Arc<dyn StateStorage>,
    listeners: SubscriptionRegistry,
    watch_tx: broadcast::Sender<Arc<AppState>>,
}

impl std::fmt::Debug for TableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableStore")
            .field("state", &self.state.read())
            .field("revision", &self.revision.load(Ordering::SeqCst))
            .field("storage", &"<StateStorage>")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TableStore {
    /// Open the redb file at `path` and restore the slot `key`
    pub fn open(path: impl AsRef<Path>, key: &str) -> ManagerResult<Self> {
        let storage = RedbStorage::open(path, key)?;
        Ok(Self::with_storage(Arc::new(storage)))
    }

    /// Create the work directory if needed, then open the configured database
    pub fn open_with_config(config: &Config) -> ManagerResult<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        Self::open(config.db_path(), &config.storage_key)
    }

    /// Store over an in-memory database
    pub fn in_memory() -> ManagerResult<Self> {
        let storage = RedbStorage::open_in_memory(super::storage::DEFAULT_STORAGE_KEY)?;
        Ok(Self::with_storage(Arc::new(storage)))
    }

    /// Create a store over any persistence adapter and restore its state
    pub fn with_storage(storage: Arc<dyn StateStorage>) -> Self {
        let restored = Self::restore(storage.as_ref());
        let (watch_tx, _) = broadcast::channel(WATCH_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(Arc::new(restored)),
            revision: AtomicU64::new(0),
            publish_lock: ReentrantMutex::new(()),
            storage,
            listeners: SubscriptionRegistry::new(),
            watch_tx,
        }
    }

    /// Load the persisted state; anything unreadable counts as "no table"
    fn restore(storage: &dyn StateStorage) -> AppState {
        match storage.load() {
            Ok(Some(state)) => {
                match &state.table {
                    Some(table) => tracing::info!(
                        shape = ?table.shape,
                        seats = table.seats,
                        common_items = table.common_order.len(),
                        "Restored table from storage"
                    ),
                    None => tracing::info!("Restored empty state from storage"),
                }
                state
            }
            Ok(None) => {
                tracing::info!("No persisted state, starting without a table");
                AppState::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted state unreadable, starting without a table");
                AppState::default()
            }
        }
    }

    // ========== Reads ==========

    /// Current immutable snapshot
    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.read().clone()
    }

    pub fn table(&self) -> Option<Table> {
        self.state.read().table.clone()
    }

    pub fn has_table(&self) -> bool {
        self.state.read().has_table()
    }

    pub fn guest(&self, guest_id: u32) -> Option<Guest> {
        self.state
            .read()
            .table
            .as_ref()
            .and_then(|t| t.guest(guest_id))
            .cloned()
    }

    pub fn summary(&self) -> TableSummary {
        self.state.read().summary()
    }

    // ========== Subscriptions ==========

    /// Register a listener called synchronously after every change
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener; false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Channel receiving every new snapshot; drop it to unsubscribe
    pub fn watch(&self) -> broadcast::Receiver<Arc<AppState>> {
        self.watch_tx.subscribe()
    }

    // ========== Commands ==========

    /// Execute a command and return the response
    pub fn execute(&self, cmd: TableCommand) -> CommandResponse {
        let kind = cmd.kind();
        match self.process(CommandAction::from(cmd)) {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(command = kind, error = %err, "Command rejected");
                CommandResponse::error(CommandError::from(&err))
            }
        }
    }

    pub fn create_table(&self, shape: TableShape, seats: u32) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::CreateTable { shape, seats }))
    }

    pub fn reset_table(&self) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::ResetTable))
    }

    pub fn add_order_item(&self, guest_id: u32, name: &str) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::AddOrderItem {
            guest_id,
            name: name.to_string(),
        }))
    }

    pub fn update_order_item_status(
        &self,
        guest_id: u32,
        item_id: &str,
        status: OrderItemStatus,
    ) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::UpdateOrderItemStatus {
            guest_id,
            item_id: item_id.to_string(),
            status,
        }))
    }

    pub fn remove_order_item(&self, guest_id: u32, item_id: &str) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::RemoveOrderItem {
            guest_id,
            item_id: item_id.to_string(),
        }))
    }

    pub fn update_guest_status(
        &self,
        guest_id: u32,
        status: GuestStatus,
    ) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::UpdateGuestStatus {
            guest_id,
            status,
        }))
    }

    pub fn update_guest_details(
        &self,
        guest_id: u32,
        details: GuestDetails,
    ) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::UpdateGuestDetails {
            guest_id,
            details,
        }))
    }

    pub fn add_common_order_item(&self, name: &str) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::AddCommonOrderItem {
            name: name.to_string(),
        }))
    }

    pub fn update_common_order_item_status(
        &self,
        item_id: &str,
        status: OrderItemStatus,
    ) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(
            TableCommand::UpdateCommonOrderItemStatus {
                item_id: item_id.to_string(),
                status,
            },
        ))
    }

    pub fn remove_common_order_item(&self, item_id: &str) -> TableResult<CommandResponse> {
        self.process(CommandAction::from(TableCommand::RemoveCommonOrderItem {
            item_id: item_id.to_string(),
        }))
    }

    /// Run one action against the current snapshot
    fn process(&self, action: CommandAction) -> TableResult<CommandResponse> {
        tracing::debug!(action = ?action, "Processing command");

        let (response, published, revision) = {
            let mut current = self.state.write();

            let Some(next) = action.execute(&current)? else {
                return Ok(CommandResponse::unchanged());
            };
            if next == **current {
                return Ok(CommandResponse::unchanged());
            }

            let next = Arc::new(next);
            *current = next.clone();
            let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;

            let response = match self.storage.save(&next) {
                Ok(()) => CommandResponse::applied(),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist table state, keeping in-memory state");
                    CommandResponse::persistence_warning(e.to_string())
                }
            };
            (response, next, revision)
        };

        self.publish(&published, revision);
        Ok(response)
    }

    /// Notify listeners and watchers, outside the state lock
    ///
    /// Drops the rest of the fan-out once `revision` is superseded; the
    /// command that superseded it publishes the newer snapshot itself.
    fn publish(&self, state: &Arc<AppState>, revision: u64) {
        let _guard = self.publish_lock.lock();
        let still_current = || self.revision.load(Ordering::SeqCst) == revision;

        if !self.listeners.notify(state, &still_current) || !still_current() {
            tracing::trace!(revision, "Snapshot superseded during fan-out");
            return;
        }
        if self.watch_tx.send(state.clone()).is_err() {
            tracing::trace!("No active watchers");
        }
    }
}

#[cfg(test)]
mod tests;
