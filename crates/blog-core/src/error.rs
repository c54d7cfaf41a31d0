//! Domain-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Stored data is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Failed to persist changes: {0}")]
    StorageWrite(String),
}

impl DomainError {
    pub fn post_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
    }
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unreadable post store {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to write post store {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            e @ StoreError::Corrupt { .. } => DomainError::StorageCorrupt(e.to_string()),
            e @ StoreError::Write { .. } => DomainError::StorageWrite(e.to_string()),
        }
    }
}
