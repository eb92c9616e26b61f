//! The full upload path against real backends: identity check, user-scoped
//! key, write to disk.

use bytes::Bytes;
use medco_auth::{AuthProvider, MemoryAuthProvider};
use medco_store::{FsStore, ObjectStore, PutOptions};
use tempfile::TempDir;

use crate::helpers::{init_test_tracing, test_session};

#[tokio::test]
async fn signed_in_upload_lands_under_the_user_key() {
    init_test_tracing();
    let auth = MemoryAuthProvider::signed_in(test_session("u1", Some("Ann")));
    let tmp = TempDir::new().unwrap();
    let store = FsStore::new(tmp.path().to_path_buf()).unwrap();

    // Session check strictly precedes the write.
    let session = auth.current_session().await.unwrap().unwrap();
    let key = format!("uploads/{}/report.pdf", session.user_id);
    assert_eq!(key, "uploads/u1/report.pdf");

    store
        .put(
            &key,
            Bytes::from_static(b"%PDF-1.4 scan"),
            &PutOptions {
                cache_control: Some("3600".to_string()),
                overwrite: false,
            },
        )
        .await
        .unwrap();

    let on_disk = std::fs::read(tmp.path().join("uploads/u1/report.pdf")).unwrap();
    assert_eq!(on_disk, b"%PDF-1.4 scan");
}

#[tokio::test]
async fn signed_out_user_never_reaches_the_store() {
    init_test_tracing();
    let auth = MemoryAuthProvider::new();
    let tmp = TempDir::new().unwrap();
    let _store = FsStore::new(tmp.path().to_path_buf()).unwrap();

    assert!(auth.current_session().await.unwrap().is_none());

    // Nothing was written anywhere under the root.
    let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn identity_change_mid_session_scopes_the_next_upload() {
    init_test_tracing();
    let auth = MemoryAuthProvider::signed_in(test_session("u1", None));
    let tmp = TempDir::new().unwrap();
    let store = FsStore::new(tmp.path().to_path_buf()).unwrap();

    let first = auth.current_session().await.unwrap().unwrap();
    store
        .put(
            &format!("uploads/{}/a.pdf", first.user_id),
            Bytes::from_static(b"a"),
            &PutOptions::default(),
        )
        .await
        .unwrap();

    // Account switch: each upload re-reads the session snapshot.
    auth.sign_in(test_session("u2", None)).await;
    let second = auth.current_session().await.unwrap().unwrap();
    store
        .put(
            &format!("uploads/{}/a.pdf", second.user_id),
            Bytes::from_static(b"a"),
            &PutOptions::default(),
        )
        .await
        .unwrap();

    assert!(tmp.path().join("uploads/u1/a.pdf").is_file());
    assert!(tmp.path().join("uploads/u2/a.pdf").is_file());
}
