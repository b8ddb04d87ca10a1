//! redb-based storage for the table state slot
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `app_state` | storage key (default `tableflow-storage`) | JSON `PersistedState` | Current state |
//!
//! # Encoding
//!
//! ```text
//! {"state":{"table":{...}|null},"version":0,"savedAt":1718000000000}
//! ```
//!
//! Table fields are camelCase (`commonOrder`), enum values snake_case
//! (`all_served`).
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: a committed state survives a
//! restart. There is no history; every save overwrites the slot.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use shared::{AppState, TableInvariantError};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table holding state slots: key = storage key, value = JSON-serialized PersistedState
const APP_STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("app_state");

/// Default slot key
pub const DEFAULT_STORAGE_KEY: &str = "tableflow-storage";

/// Envelope version written by this build
pub const STATE_VERSION: u32 = 0;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported state version: {0}")]
    UnsupportedVersion(u32),

    #[error("Stored table is inconsistent: {0}")]
    InvalidState(#[from] TableInvariantError),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Versioned envelope written to the slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub state: AppState,
    pub version: u32,
    /// Unix milliseconds of the write
    #[serde(default)]
    pub saved_at: i64,
}

/// Encode a state into the slot format
pub fn encode_state(state: &AppState) -> StorageResult<Vec<u8>> {
    let envelope = PersistedState {
        state: state.clone(),
        version: STATE_VERSION,
        saved_at: shared::util::now_millis(),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode slot bytes, rejecting unknown versions and broken tables
pub fn decode_state(bytes: &[u8]) -> StorageResult<AppState> {
    let envelope: PersistedState = serde_json::from_slice(bytes)?;
    if envelope.version > STATE_VERSION {
        return Err(StorageError::UnsupportedVersion(envelope.version));
    }
    if let Some(table) = &envelope.state.table {
        table.validate()?;
    }
    Ok(envelope.state)
}

/// Persistence adapter required by the table store
pub trait StateStorage: Send + Sync {
    /// Read the slot. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<AppState>>;

    /// Overwrite the slot with `state`
    fn save(&self, state: &AppState) -> StorageResult<()>;
}

/// State storage backed by redb
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
    key: String,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage")
            .field("db", &"<redb::Database>")
            .field("key", &self.key)
            .finish()
    }
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>, key: impl Into<String>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db, key.into())
    }

    /// Open an in-memory database (tests, throwaway sessions)
    pub fn open_in_memory(key: impl Into<String>) -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db, key.into())
    }

    fn init(db: Database, key: String) -> StorageResult<Self> {
        // Create the table so read transactions never see it missing
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(APP_STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            key,
        })
    }

    /// Raw slot bytes
    pub(crate) fn read_raw(&self) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(APP_STATE_TABLE)?;
        Ok(table.get(self.key.as_str())?.map(|v| v.value().to_vec()))
    }

    /// Overwrite the slot with raw bytes
    pub(crate) fn write_raw(&self, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(APP_STATE_TABLE)?;
            table.insert(self.key.as_str(), bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Delete the slot entirely
    #[cfg(test)]
    pub(crate) fn clear(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(APP_STATE_TABLE)?;
            table.remove(self.key.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl StateStorage for RedbStorage {
    fn load(&self) -> StorageResult<Option<AppState>> {
        match self.read_raw()? {
            Some(bytes) => Ok(Some(decode_state(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> StorageResult<()> {
        let bytes = encode_state(state)?;
        self.write_raw(&bytes)
    }
}
