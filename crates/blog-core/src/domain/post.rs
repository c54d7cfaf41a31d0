use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque post identifier, the string form of a random UUID.
///
/// Identifiers carry no ordering; compare them only for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Post entity - a short blog entry with a like counter.
///
/// Records carrying fields beyond these four are rejected rather than
/// loaded, since a later save would drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub likes: u64,
}

impl Post {
    /// Create a new post with a generated id and no likes.
    ///
    /// The title is trimmed and must not be empty; content is kept verbatim.
    pub fn new(title: &str, content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: PostId::generate(),
            title: validate_title(title)?,
            content: content.to_string(),
            likes: 0,
        })
    }

    /// Replace title and content, leaving id and likes untouched.
    pub fn revise(&mut self, title: &str, content: &str) -> Result<(), DomainError> {
        self.title = validate_title(title)?;
        self.content = content.to_string();
        Ok(())
    }

    /// Add one like.
    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// Trim a title and reject it if nothing is left.
pub fn validate_title(title: &str) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_without_likes() {
        let post = Post::new("  Hello ", "World").unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(matches!(
            Post::new("", "body"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Post::new(" \t\n", "body"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_content_allowed() {
        let post = Post::new("Title", "").unwrap();
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_revise_keeps_id_and_likes() {
        let mut post = Post::new("Hello", "World").unwrap();
        post.like();
        let id = post.id.clone();

        post.revise("Hi", "").unwrap();
        assert_eq!(post.id, id);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "");
        assert_eq!(post.likes, 1);

        assert!(post.revise("   ", "x").is_err());
        assert_eq!(post.title, "Hi");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = PostId::generate();
        let b = PostId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_post_serializes_to_flat_record() {
        let post = Post {
            id: PostId::from("abc"),
            title: "Hello".to_string(),
            content: "World".to_string(),
            likes: 3,
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "abc", "title": "Hello", "content": "World", "likes": 3})
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let raw = r#"{"id": "a", "title": "t", "content": "c", "likes": 0, "author": "Martin"}"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }
}
