use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::document::errors::StorageError;
use crate::domain::document::ports::BlobStorage;

/// Filesystem-backed blob storage.
///
/// Writes uploaded files under a configured root directory and builds their
/// public URLs from a configured base. Keys never contain client-supplied
/// file names, so no path sanitization is needed here.
pub struct FsBlobStorage {
    root: PathBuf,
    public_base_url: String,
}

impl FsBlobStorage {
    /// Create a filesystem blob store.
    ///
    /// # Arguments
    /// * `root` - Directory uploaded files are written into
    /// * `public_base_url` - URL prefix under which the files are served
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl BlobStorage for FsBlobStorage {
    async fn put(
        &self,
        key: &str,
        _content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(write_failed)?;
        tokio::fs::write(self.root.join(key), bytes)
            .await
            .map_err(write_failed)?;

        Ok(format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("doc-storage-test-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_put_writes_file_and_returns_url() {
        let root = temp_root();
        let storage = FsBlobStorage::new(&root, "http://localhost:8000/files/");

        let url = storage
            .put("abc.pdf", "application/pdf", b"%PDF-1.7")
            .await
            .expect("Failed to store blob");

        assert_eq!(url, "http://localhost:8000/files/abc.pdf");
        let written = std::fs::read(root.join("abc.pdf")).expect("Failed to read back blob");
        assert_eq!(written, b"%PDF-1.7");

        std::fs::remove_dir_all(&root).ok();
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let root = temp_root();
        let storage = FsBlobStorage::new(&root, "http://localhost:8000/files");

        storage.put("doc.csv", "text/csv", b"a\n").await.unwrap();
        storage.put("doc.csv", "text/csv", b"b\n").await.unwrap();

        let written = std::fs::read(root.join("doc.csv")).unwrap();
        assert_eq!(written, b"b\n");

        std::fs::remove_dir_all(&root).ok();
    }
}
