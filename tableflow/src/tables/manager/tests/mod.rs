use super::*;
use crate::tables::storage::{StorageError, StorageResult};
use crate::tables::traits::TableError;
use shared::{CommandErrorCode, GuestGender};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

fn create_test_store() -> TableStore {
    TableStore::in_memory().unwrap()
}

/// Store with a table of `seats` guests
fn create_store_with_table(seats: u32) -> TableStore {
    let store = create_test_store();
    let resp = store.create_table(TableShape::Round, seats).unwrap();
    assert!(resp.success && resp.changed, "Failed to create table");
    store
}

/// Id of the most recently added item of a guest
fn last_item_id(store: &TableStore, guest_id: u32) -> String {
    store
        .guest(guest_id)
        .and_then(|g| g.orders.last().map(|i| i.id.clone()))
        .expect("guest should have an item")
}

fn last_common_item_id(store: &TableStore) -> String {
    store
        .table()
        .and_then(|t| t.common_order.last().map(|i| i.id.clone()))
        .expect("table should have a common item")
}

/// Storage whose writes can be switched off
#[derive(Default)]
struct FlakyStorage {
    saved: Mutex<Option<AppState>>,
    failing: AtomicBool,
    saves: AtomicUsize,
}

impl FlakyStorage {
    fn failing() -> Self {
        let storage = Self::default();
        storage.failing.store(true, Ordering::SeqCst);
        storage
    }
}

impl StateStorage for FlakyStorage {
    fn load(&self) -> StorageResult<Option<AppState>> {
        Ok(self.saved.lock().unwrap().clone())
    }

    fn save(&self, state: &AppState) -> StorageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Storage(redb::StorageError::Io(
                std::io::Error::other("disk full"),
            )));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.saved.lock().unwrap() = Some(state.clone());
        Ok(())
    }
}
