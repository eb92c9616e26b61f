//! Upload orchestration: session check, user-scoped key, store write.
//!
//! The flow is strictly ordered within one attempt: the session fetch
//! resolves before the store write begins, and the write resolves before
//! the caller may navigate. Exactly one attempt per user gesture, no retry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use medco_auth::{AuthError, AuthProvider, Session, UserId};
use medco_store::{ObjectStore, PutOptions, StoreError};
use thiserror::Error;

/// Prefix under which every user's documents live.
const KEY_PREFIX: &str = "uploads";

/// Cache-control hint forwarded with every upload.
const CACHE_CONTROL: &str = "3600";

/// A file chosen by the user, read into memory for upload.
#[derive(Debug, Clone)]
pub struct PickedFile {
    /// Original file name, preserved in the destination key.
    pub name: String,
    pub data: Bytes,
}

/// Why an upload attempt did not complete.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The identity provider could not be queried.
    #[error("unable to fetch session: {0}")]
    SessionFetch(#[from] AuthError),
    /// Nobody is signed in; uploads require an authenticated user.
    #[error("you must be logged in to upload files")]
    NotSignedIn,
    /// The store rejected the write.
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Destination key for a user's document: `uploads/{user_id}/{file_name}`.
///
/// Namespacing under the uploader's id keeps users' documents from
/// colliding; access control itself belongs to the storage backend.
pub fn destination_key(user_id: &UserId, file_name: &str) -> String {
    format!("{KEY_PREFIX}/{user_id}/{file_name}")
}

/// Open the native file picker, filtered to PDF documents.
///
/// Returns the selected path, or `None` if cancelled.
pub async fn pick_pdf() -> Option<PathBuf> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Upload Your PDF")
        .add_filter("PDF document", &["pdf"])
        .pick_file()
        .await?;
    Some(handle.path().to_path_buf())
}

/// Read a picked file into memory for upload.
pub async fn read_picked(path: &Path) -> Result<PickedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    Ok(PickedFile {
        name,
        data: data.into(),
    })
}

/// Fetch and validate the session for an upload attempt.
///
/// Distinguishes a failed fetch from a signed-out user: both abort the
/// attempt before any store call, with different user-facing notices.
pub async fn resolve_uploader<A: AuthProvider + ?Sized>(auth: &A) -> Result<Session, UploadError> {
    match auth.current_session().await {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(UploadError::NotSignedIn),
        Err(e) => {
            tracing::error!(error = %e, "session fetch failed");
            Err(e.into())
        }
    }
}

/// Write the picked file under the uploader's key.
///
/// Returns the destination key on success. Never overwrites: a second
/// upload of the same file name by the same user fails.
pub async fn store_document<S: ObjectStore + ?Sized>(
    store: &S,
    session: &Session,
    file: &PickedFile,
) -> Result<String, UploadError> {
    let key = destination_key(&session.user_id, &file.name);
    let options = PutOptions {
        cache_control: Some(CACHE_CONTROL.to_string()),
        overwrite: false,
    };
    store.put(&key, file.data.clone(), &options).await?;

    tracing::info!(key = %key, size = file.data.len(), "file uploaded");
    Ok(key)
}
