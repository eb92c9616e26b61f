//! In-memory object store for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::object::{validate_key, ObjectStore, PutOptions, StoreError};

/// An [`ObjectStore`] holding objects in a map. Honors the same overwrite
/// and key rules as the real backends.
#[derive(Debug, Default)]
pub struct MemStore {
    objects: RwLock<HashMap<String, Bytes>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemStore {
    async fn put(&self, key: &str, data: Bytes, options: &PutOptions) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut objects = self.objects.write().await;
        if !options.overwrite && objects.contains_key(key) {
            return Err(StoreError::AlreadyExists(key.to_string()));
        }
        tracing::debug!(key, size = data.len(), "object stored in memory");
        objects.insert(key.to_string(), data);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        validate_key(key)?;
        Ok(self.objects.read().await.get(key).cloned())
    }
}
