//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::ScheduleStore;

/// Shared application state.
///
/// Handlers take the read lock for lookups and search and the write lock for
/// updates, so every store operation is atomic. Concurrent writes to the same
/// key are applied in lock order: the later writer wins an upsert, and the
/// later of two identical `add_train` calls gets a conflict.
#[derive(Clone)]
pub struct AppState {
    /// Trains and station timetables
    pub store: Arc<RwLock<ScheduleStore>>,
}

impl AppState {
    /// Create a new app state owning `store`.
    pub fn new(store: ScheduleStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
