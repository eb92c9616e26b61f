//! The `ObjectStore` trait, write options, and key validation.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Options for a single `put`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutOptions {
    /// Cache-control hint forwarded to backends that support one.
    pub cache_control: Option<String>,
    /// Whether an existing object under the same key may be replaced.
    pub overwrite: bool,
}

impl Default for PutOptions {
    fn default() -> Self {
        Self {
            cache_control: None,
            overwrite: false,
        }
    }
}

/// Errors surfaced by an object store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key already holds an object and overwrite was not requested.
    #[error("object already exists: {0}")]
    AlreadyExists(String),
    /// Keys are relative slash-separated paths; anything else is rejected.
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Backend-specific failure description.
    #[error("{0}")]
    Backend(String),
}

/// External object storage: accepts binary objects keyed by path.
///
/// Object-safe so the application shell can hold an injected
/// `Arc<dyn ObjectStore>` and tests can substitute an in-memory store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`.
    ///
    /// With `options.overwrite == false`, a key collision fails with
    /// [`StoreError::AlreadyExists`] and leaves the stored object untouched.
    async fn put(&self, key: &str, data: Bytes, options: &PutOptions) -> Result<(), StoreError>;

    /// Read an object back, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
}

/// Reject keys that could escape the store's namespace.
///
/// Keys must be non-empty relative paths with no `.`/`..` components and no
/// empty segments.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() || key.starts_with('/') {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    for segment in key.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
    }
    Ok(())
}
