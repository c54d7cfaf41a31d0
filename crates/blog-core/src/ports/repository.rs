use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::DomainError;

/// Post repository - every call is one complete load, mutate and save cycle.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in stored order.
    async fn list_all(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a single post by its id.
    async fn find_by_id(&self, id: &PostId) -> Result<Post, DomainError>;

    /// Create and persist a new post.
    async fn create(&self, title: &str, content: &str) -> Result<Post, DomainError>;

    /// Replace title and content of an existing post.
    async fn update(&self, id: &PostId, title: &str, content: &str) -> Result<Post, DomainError>;

    /// Remove a post.
    async fn delete(&self, id: &PostId) -> Result<(), DomainError>;

    /// Add one like to a post.
    async fn like(&self, id: &PostId) -> Result<Post, DomainError>;
}
