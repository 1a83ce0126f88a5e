//! Application state - shared across all handlers.

use std::sync::Arc;

use pressroom_core::PostAdminService;
use pressroom_core::ports::{BlobStore, PostRepository, TagRepository};
use pressroom_infra::{FsBlobStore, InMemoryPostRepository, InMemoryTagRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PostAdminService>,
}

impl AppState {
    /// Build the application state with the configured implementations:
    /// in-memory repositories and a filesystem blob store rooted at the
    /// configured upload directory.
    pub fn new(config: &AppConfig) -> std::io::Result<Self> {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        let tags: Arc<dyn TagRepository> =
            Arc::new(InMemoryTagRepository::with_tags(config.seed_tags.clone()));
        let blobs: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(config.upload_dir.clone())?);

        tracing::info!(
            upload_dir = %config.upload_dir.display(),
            seeded_tags = config.seed_tags.len(),
            "Application state initialized"
        );

        Ok(Self {
            service: Arc::new(PostAdminService::new(posts, tags, blobs)),
        })
    }
}
