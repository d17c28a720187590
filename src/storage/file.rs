//! File-based storage backend.
//!
//! Each slot is a JSON file named after its key inside the base directory.
//! Writes go to a temporary file first and are renamed over the target, so a
//! crash mid-write leaves the previous snapshot intact.

use crate::storage::{StorageError, StorageInterface};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `base_path`. The directory is created lazily
    /// on the first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The directory holding the slot files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Converts a slot key to a filesystem-safe file path.
    fn slot_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':'], "_");
        self.base_path.join(format!("{}.json", safe_key))
    }
}

#[async_trait]
impl StorageInterface for FileStorage {
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.slot_path(key);
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let path = self.slot_path(key);

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        tracing::trace!(path = %path.display(), "Slot written");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        match fs::remove_file(&path).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        fs::try_exists(self.slot_path(key))
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_directory_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested").join("data"));

        assert!(matches!(
            storage.get_bytes("orders").await,
            Err(StorageError::NotFound)
        ));

        storage
            .set_bytes("orders", br#"[{"id":1}]"#.to_vec())
            .await
            .unwrap();

        assert!(storage.exists("orders").await.unwrap());
        assert_eq!(
            storage.get_bytes("orders").await.unwrap(),
            br#"[{"id":1}]"#.to_vec()
        );
        assert!(storage.base_path().join("orders.json").exists());
        assert!(!storage.base_path().join("orders.tmp").exists());
    }

    #[tokio::test]
    async fn test_overwrite_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set_bytes("orders", b"[]".to_vec()).await.unwrap();
        storage.set_bytes("orders", b"[1,2]".to_vec()).await.unwrap();
        assert_eq!(storage.get_bytes("orders").await.unwrap(), b"[1,2]".to_vec());

        storage.delete("orders").await.unwrap();
        assert!(!storage.exists("orders").await.unwrap());
        storage.delete("orders").await.unwrap();
    }

    #[test]
    fn test_slot_path_is_sanitized() {
        let storage = FileStorage::new("/tmp/base");
        assert_eq!(
            storage.slot_path("a/b:c"),
            PathBuf::from("/tmp/base/a_b_c.json")
        );
    }
}
