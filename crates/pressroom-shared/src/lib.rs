//! # Pressroom Shared
//!
//! DTOs and response envelopes shared between the HTTP server and clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
