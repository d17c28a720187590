//! In-memory storage backend.
//!
//! Clones share the same underlying map, so a test can hand one clone to the
//! actor and keep another to inspect what was persisted.

use crate::storage::{StorageError, StorageInterface};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage implementation.
///
/// Nothing survives the process, but the store still goes through the full
/// serialize/persist/restore cycle.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageInterface for MemoryStorage {
    async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let slots = self.slots.read().await;
        slots.get(key).cloned().ok_or(StorageError::NotFound)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut slots = self.slots.write().await;
        slots.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().await;
        slots.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let slots = self.slots.read().await;
        Ok(slots.contains_key(key))
    }
}
