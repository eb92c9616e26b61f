//! Filesystem-backed object store for local mode.
//!
//! Keys map to paths under a root directory; `uploads/u1/report.pdf` lands
//! at `<root>/uploads/u1/report.pdf`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::AsyncWriteExt;

use crate::object::{validate_key, ObjectStore, PutOptions, StoreError};

/// An [`ObjectStore`] rooted at a local directory.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&root)?;
        tracing::info!(root = %root.display(), "file store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn put(&self, key: &str, data: Bytes, options: &PutOptions) -> Result<(), StoreError> {
        let path = self.object_path(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // `create_new` makes the existence check and the creation a single
        // syscall, so concurrent puts of one key admit exactly one writer.
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .create_new(!options.overwrite)
            .truncate(options.overwrite)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(key.to_string()),
                _ => StoreError::Io(e),
            })?;
        file.write_all(&data).await?;
        file.flush().await?;

        tracing::info!(
            key,
            size = data.len(),
            path = %path.display(),
            "object written"
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        let path = self.object_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(data.into())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
