use async_trait::async_trait;
use bytes::Bytes;

/// Blob store trait - abstraction over binary file storage backends.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist a payload under the given directory prefix and return the
    /// reference key it can later be deleted by.
    async fn put(
        &self,
        directory: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<String, BlobStoreError>;

    /// Remove a stored payload. Implementations treat a missing blob as
    /// success so that delete stays idempotent.
    async fn delete(&self, reference: &str) -> Result<(), BlobStoreError>;
}

/// Blob store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("Invalid blob reference: {0}")]
    InvalidReference(String),

    #[error("I/O failure: {0}")]
    Io(String),
}
