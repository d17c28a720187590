//! # Storage Port
//!
//! The store persists its whole collection as one serialized snapshot in a named
//! slot. This module defines the port the actor talks to ([`StorageInterface`]) and
//! the two backends shipped with the crate:
//!
//! - [`MemoryStorage`] - process-local map, used by tests and ephemeral runs
//! - [`FileStorage`] - one JSON file per slot inside a data directory
//!
//! The port is injected into the actor at construction, so tests can swap the
//! file backend for an in-memory fake (or a deliberately failing one).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::StorageConfig;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested slot holds no value.
    #[error("Not found")]
    NotFound,
    /// A snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The backend itself failed (I/O, permissions, ...).
    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Low-level key-value interface every storage backend implements.
#[async_trait]
pub trait StorageInterface: Send + Sync {
    /// Retrieves the raw bytes stored under `key`.
    ///
    /// Returns [`StorageError::NotFound`] when the slot is empty.
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Replaces the value stored under `key`.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

    /// Clears the slot. Clearing an empty slot is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Checks if the slot currently holds a value.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;
}

/// Builds the backend selected by the configuration.
pub fn create_storage(config: &StorageConfig) -> Result<Arc<dyn StorageInterface>, StorageError> {
    match config {
        StorageConfig::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageConfig::File { path } => {
            if path.as_os_str().is_empty() {
                return Err(StorageError::Backend(
                    "file storage requires a non-empty path".into(),
                ));
            }
            Ok(Arc::new(FileStorage::new(path.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage(&StorageConfig::Memory).unwrap();
        storage.set_bytes("orders", b"[]".to_vec()).await.unwrap();
        assert!(storage.exists("orders").await.unwrap());
    }

    #[test]
    fn test_create_file_storage_rejects_empty_path() {
        let result = create_storage(&StorageConfig::File { path: PathBuf::new() });
        assert!(matches!(result, Err(StorageError::Backend(_))));
    }
}
