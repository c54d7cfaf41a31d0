use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Post store trait - reads and writes the whole post collection at once.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load the full collection in stored order.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the stored collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
