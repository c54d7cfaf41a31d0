//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the post stores and the repository that drives them.
//!
//! ## Stores
//!
//! - [`JsonFileStore`] - the whole collection in one JSON array file
//! - [`InMemoryPostStore`] - process-local fallback, lost on restart

pub mod repository;
pub mod storage;

pub use repository::LockedPostRepository;
pub use storage::{InMemoryPostStore, JsonFileStore};
