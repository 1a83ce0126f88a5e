//! # Pressroom Core
//!
//! The domain layer of the Pressroom admin backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod slug;

pub use error::DomainError;
pub use services::PostAdminService;
