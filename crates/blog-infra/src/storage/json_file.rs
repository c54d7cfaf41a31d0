//! JSON file post store - the whole collection lives in one array document.

use std::collections::HashSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use blog_core::domain::Post;
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

/// Post store backed by a single JSON file.
///
/// A missing or blank file reads as an empty collection. Anything else that
/// does not parse into well-formed posts with unique ids is reported as
/// corrupt; a partial collection is never returned.
///
/// Saves go through a sibling `.tmp` file that is renamed over the target,
/// so a failed write leaves the previous content in place.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("posts.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt(&self, reason: impl ToString) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_failed(&self, reason: impl ToString) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn parse(&self, raw: &str) -> Result<Vec<Post>, StoreError> {
        let posts: Vec<Post> = serde_json::from_str(raw).map_err(|e| self.corrupt(e))?;

        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id.as_str()) {
                return Err(self.corrupt(format!("duplicate post id {}", post.id)));
            }
            if post.title.trim().is_empty() {
                return Err(self.corrupt(format!("post {} has an empty title", post.id)));
            }
        }

        Ok(posts)
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Post store missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.corrupt(e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let posts = self.parse(&raw)?;
        tracing::debug!(path = %self.path.display(), count = posts.len(), "Loaded posts");
        Ok(posts)
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(posts).map_err(|e| self.write_failed(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_failed(e))?;
        }

        let tmp = self.temp_path();
        let written = match tokio::fs::write(&tmp, json).await {
            Ok(()) => tokio::fs::rename(&tmp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(self.write_failed(e));
        }

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Saved posts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("posts.json"))
    }

    async fn load_raw(raw: &str) -> Result<Vec<Post>, StoreError> {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), raw).unwrap();
        store.load().await
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_file_is_empty() {
        assert!(load_raw("").await.unwrap().is_empty());
        assert!(load_raw("  \n").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut second = Post::new("Second", "").unwrap();
        second.likes = 7;
        let posts = vec![Post::new("First", "body").unwrap(), second];

        store.save(&posts).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, posts);

        store.save(&loaded).await.unwrap();
        assert_eq!(store.load().await.unwrap(), posts);
    }

    #[tokio::test]
    async fn test_reads_array_layout() {
        let posts = load_raw(
            r#"[
                {"id": "a", "title": "Hello", "content": "World", "likes": 2},
                {"id": "b", "title": "Bye", "content": "", "likes": 0}
            ]"#,
        )
        .await
        .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id.as_str(), "a");
        assert_eq!(posts[0].likes, 2);
        assert_eq!(posts[1].title, "Bye");
    }

    #[tokio::test]
    async fn test_malformed_content_is_corrupt() {
        for raw in [
            "not json",
            r#"{"a": {"id": "a", "title": "t", "content": "", "likes": 0}}"#,
            r#"[{"id": "a", "title": "t", "content": ""}]"#,
            r#"[{"id": "a", "title": "t", "content": "", "likes": -1}]"#,
            r#"[{"id": "a", "title": "t", "content": "", "likes": 1.5}]"#,
            r#"[{"id": "a", "title": "  ", "content": "", "likes": 0}]"#,
            r#"[{"id": "a", "title": "t", "content": "", "likes": 0},
                {"id": "a", "title": "u", "content": "", "likes": 0}]"#,
            r#"[{"id": "a", "title": "t", "content": "", "likes": 0, "author": "Martin"}]"#,
            "[1, 2",
        ] {
            assert!(
                matches!(load_raw(raw).await, Err(StoreError::Corrupt { .. })),
                "expected corrupt for {raw}"
            );
        }
    }

    #[tokio::test]
    async fn test_save_creates_parent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("posts.json"));

        store.save(&[Post::new("Hello", "").unwrap()]).await.unwrap();

        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).unwrap().is_array());
    }

    #[tokio::test]
    async fn test_save_failure_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // The target is a directory, so the final rename cannot succeed.
        let store = JsonFileStore::new(dir.path());

        let result = store.save(&[Post::new("Hello", "").unwrap()]).await;
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let posts = vec![Post::new("Hello", "World").unwrap()];
        store.save(&posts).await.unwrap();
        let before = std::fs::read(store.path()).unwrap();

        // A directory in the temp file's place makes the write fail.
        std::fs::create_dir(store.temp_path()).unwrap();

        let result = store.save(&[]).await;
        assert!(matches!(result, Err(StoreError::Write { .. })));
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
        assert_eq!(store.load().await.unwrap(), posts);
    }
}
