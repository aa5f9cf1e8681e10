use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::ApiError;
use crate::blog::BlogStore;

/// Everything the handlers share: built once in `main`, handed to the
/// router, and passed to each handler as `Arc<AppState>`.
///
/// The store sits behind a lock because connections are served from several
/// tokio worker threads. Guards are never held across an `.await`.
#[derive(Debug)]
pub struct AppState {
    store: RwLock<BlogStore>,
}

impl AppState {
    pub fn new(store: BlogStore) -> Self {
        Self { store: RwLock::new(store) }
    }

    /// State over the four sample posts.
    pub fn seeded() -> Self {
        Self::new(BlogStore::seeded())
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, BlogStore>, ApiError> {
        self.store.read().map_err(|_| poisoned())
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, BlogStore>, ApiError> {
        self.store.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> ApiError {
    ApiError::Internal("blog store lock poisoned".to_owned())
}
