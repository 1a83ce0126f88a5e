//! Repository implementations.

mod memory;

pub use memory::{InMemoryPostRepository, InMemoryTagRepository};
