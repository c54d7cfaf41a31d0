//! Post repository over a whole-collection store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use blog_core::DomainError;
use blog_core::domain::{Post, PostId, validate_title};
use blog_core::ports::{PostRepository, PostStore};

/// Post repository that runs every operation as load, mutate, save.
///
/// A single async mutex spans each cycle, so concurrent requests from
/// different server workers cannot lose each other's updates. Nothing is
/// cached between calls; the store stays the source of truth.
pub struct LockedPostRepository {
    store: Arc<dyn PostStore>,
    lock: Mutex<()>,
}

impl LockedPostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    fn position(posts: &[Post], id: &PostId) -> Result<usize, DomainError> {
        posts
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Load, apply `mutate` to the matching post, save, return the post.
    async fn modify<F>(&self, id: &PostId, mutate: F) -> Result<Post, DomainError>
    where
        F: FnOnce(&mut Post) -> Result<(), DomainError> + Send,
    {
        let _guard = self.lock.lock().await;

        let mut posts = self.store.load().await?;
        let idx = Self::position(&posts, id)?;
        mutate(&mut posts[idx])?;
        let post = posts[idx].clone();

        self.store.save(&posts).await?;
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for LockedPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.store.load().await?)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Post, DomainError> {
        let _guard = self.lock.lock().await;
        let posts = self.store.load().await?;
        let idx = Self::position(&posts, id)?;
        Ok(posts[idx].clone())
    }

    async fn create(&self, title: &str, content: &str) -> Result<Post, DomainError> {
        let mut post = Post::new(title, content)?;

        let _guard = self.lock.lock().await;
        let mut posts = self.store.load().await?;
        while posts.iter().any(|p| p.id == post.id) {
            post.id = PostId::generate();
        }
        posts.push(post.clone());
        self.store.save(&posts).await?;

        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: &PostId, title: &str, content: &str) -> Result<Post, DomainError> {
        validate_title(title)?;

        let post = self.modify(id, |post| post.revise(title, content)).await?;
        tracing::info!(post_id = %id, "Post updated");
        Ok(post)
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;

        let mut posts = self.store.load().await?;
        let idx = Self::position(&posts, id)?;
        posts.remove(idx);
        self.store.save(&posts).await?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn like(&self, id: &PostId) -> Result<Post, DomainError> {
        let post = self
            .modify(id, |post| {
                post.like();
                Ok(())
            })
            .await?;
        tracing::debug!(post_id = %id, likes = post.likes, "Post liked");
        Ok(post)
    }
}
