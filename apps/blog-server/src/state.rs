//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{PostRepository, PostStore};
use blog_infra::{InMemoryPostStore, JsonFileStore, LockedPostRepository};

use crate::config::StorageConfig;

/// Shared application state.
///
/// One repository instance is shared by every worker so its lock covers
/// all requests.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state for the configured storage.
    pub fn new(storage: &StorageConfig) -> Self {
        let store: Arc<dyn PostStore> = match storage {
            StorageConfig::File(path) => {
                tracing::info!(path = %path.display(), "Using JSON file post store");
                Arc::new(JsonFileStore::new(path.clone()))
            }
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory post store - posts are lost on restart");
                Arc::new(InMemoryPostStore::new())
            }
        };

        Self::from_store(store)
    }

    pub fn from_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: Arc::new(LockedPostRepository::new(store)),
        }
    }
}
