//! In-memory blob store - used in tests and when no upload directory is
//! configured.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use pressroom_core::ports::{BlobStore, BlobStoreError};

/// Blob store keeping payloads in a HashMap. References carry a sequence
/// number so repeated uploads of the same file name stay distinct.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Bytes>>,
    sequence: AtomicU64,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the reference is still stored.
    pub async fn contains(&self, reference: &str) -> bool {
        self.blobs.read().await.contains_key(reference)
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(
        &self,
        directory: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<String, BlobStoreError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let reference = format!("{directory}/{sequence}-{file_name}");

        let mut blobs = self.blobs.write().await;
        blobs.insert(reference.clone(), data);
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), BlobStoreError> {
        let mut blobs = self.blobs.write().await;
        blobs.remove(reference);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_delete_round_trip() {
        let store = InMemoryBlobStore::new();

        let reference = store
            .put("post_covers", "cover.png", Bytes::from_static(b"data"))
            .await
            .unwrap();
        assert!(store.contains(&reference).await);

        store.delete(&reference).await.unwrap();
        assert!(!store.contains(&reference).await);
    }

    #[tokio::test]
    async fn repeated_names_get_distinct_references() {
        let store = InMemoryBlobStore::new();

        let first = store
            .put("post_covers", "cover.png", Bytes::from_static(b"a"))
            .await
            .unwrap();
        let second = store
            .put("post_covers", "cover.png", Bytes::from_static(b"b"))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }
}
