//! # Pressroom Infrastructure
//!
//! Concrete implementations of the ports defined in `pressroom-core`:
//! in-memory repositories, an in-memory blob store, and a filesystem blob
//! store for running the server against a real upload directory.

pub mod repository;
pub mod storage;


pub use repository::{InMemoryPostRepository, InMemoryTagRepository};
pub use storage::{FsBlobStore, InMemoryBlobStore};
