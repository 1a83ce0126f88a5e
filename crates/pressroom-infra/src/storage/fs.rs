//! Filesystem-backed blob store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use slug::slugify;
use tokio::fs;
use uuid::Uuid;

use pressroom_core::ports::{BlobStore, BlobStoreError};

/// Blob store writing payloads under a root directory.
///
/// Reference keys look like `post_covers/<uuid>-<sanitized-name>` and stay
/// relative to the root; anything absolute or containing `..` is rejected.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Root the store at the given directory, creating it if necessary.
    pub fn new(root: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn resolve(&self, reference: &str) -> Result<PathBuf, BlobStoreError> {
        let relative = Path::new(reference);
        if relative.is_absolute()
            || relative
                .components()
                .any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(BlobStoreError::InvalidReference(reference.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(
        &self,
        directory: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<String, BlobStoreError> {
        let reference = format!(
            "{directory}/{}-{}",
            Uuid::new_v4(),
            sanitize_file_name(file_name)
        );
        let absolute = self.resolve(&reference)?;

        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        fs::write(&absolute, &data).await.map_err(io_error)?;

        tracing::debug!(reference = %reference, bytes = data.len(), "blob stored");
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), BlobStoreError> {
        let absolute = self.resolve(reference)?;
        match fs::remove_file(&absolute).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(err)),
        }
    }
}

fn io_error(err: std::io::Error) -> BlobStoreError {
    BlobStoreError::Io(err.to_string())
}

/// Slugify the stem and lowercase the extension so stored names stay
/// shell- and URL-safe regardless of what the client sent.
fn sanitize_file_name(original: &str) -> String {
    let path = Path::new(original);
    let stem = path
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("upload");
    let mut base = slugify(stem);
    if base.is_empty() {
        base = "upload".to_string();
    }

    match path.extension().and_then(|value| value.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{base}.{}", ext.to_ascii_lowercase()),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_writes_file_under_directory_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path().to_path_buf()).unwrap();

        let reference = store
            .put("post_covers", "My Cover.PNG", Bytes::from_static(b"data"))
            .await
            .unwrap();

        assert!(reference.starts_with("post_covers/"));
        assert!(reference.ends_with("-my-cover.png"));
        assert_eq!(std::fs::read(dir.path().join(&reference)).unwrap(), b"data");
    }

    #[tokio::test]
    async fn delete_removes_file_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path().to_path_buf()).unwrap();

        let reference = store
            .put("post_covers", "cover.png", Bytes::from_static(b"data"))
            .await
            .unwrap();

        store.delete(&reference).await.unwrap();
        assert!(!dir.path().join(&reference).exists());

        store.delete(&reference).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_traversal_references() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path().to_path_buf()).unwrap();

        let err = store.delete("../outside").await.unwrap_err();
        assert!(matches!(err, BlobStoreError::InvalidReference(_)));

        let err = store.delete("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, BlobStoreError::InvalidReference(_)));
    }
}
