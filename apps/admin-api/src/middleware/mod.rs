//! Request middleware: identity extraction and error translation.

pub mod auth;
pub mod error;
