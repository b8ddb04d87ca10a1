//! Change listeners
//!
//! Listeners run synchronously on the thread that applied the change, in
//! registration order, after the new snapshot is in place.

use parking_lot::RwLock;
use shared::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Callback receiving each new snapshot
pub type Listener = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of change listeners
#[derive(Default)]
pub struct SubscriptionRegistry {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
}

impl std::fmt::Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        self.listeners.write().push((id, listener));
        id
    }

    /// Returns false if the id was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Call every listener with `state` while `still_current()` holds
    ///
    /// The lock is released before calling out, so a listener may
    /// subscribe or unsubscribe without deadlocking. Returns false when the
    /// fan-out stopped early because `state` was superseded.
    pub fn notify<F>(&self, state: &Arc<AppState>, still_current: F) -> bool
    where
        F: Fn() -> bool,
    {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            if !still_current() {
                return false;
            }
            listener(state);
        }
        true
    }
}
