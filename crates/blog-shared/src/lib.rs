//! # Blog Shared
//!
//! Wire types shared between the server and any client of the JSON API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
