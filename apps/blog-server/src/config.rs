//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where posts are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// A JSON file on disk.
    File(PathBuf),
    /// Process memory only.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match get("STORAGE").map(|s| s.to_lowercase()).as_deref() {
            Some("memory") => StorageConfig::Memory,
            _ => StorageConfig::File(
                get("POSTS_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("data/posts.json")),
            ),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage,
        }
    }
}
