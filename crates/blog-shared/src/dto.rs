//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. Missing content means an empty body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request to replace a post's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Response containing a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub likes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_defaults_to_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(req.title, "Hello");
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_title_is_required() {
        assert!(serde_json::from_str::<UpdatePostRequest>(r#"{"content": "x"}"#).is_err());
    }
}
