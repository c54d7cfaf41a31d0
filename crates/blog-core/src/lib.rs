//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post model, its invariants and the port traits,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, StoreError};
