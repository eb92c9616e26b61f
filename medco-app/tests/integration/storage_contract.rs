//! Both store backends honor the same write contract.

use bytes::Bytes;
use medco_store::{FsStore, MemStore, ObjectStore, PutOptions, StoreError};
use tempfile::TempDir;

use crate::helpers::init_test_tracing;

async fn exercise_contract(store: &dyn ObjectStore) {
    let options = PutOptions {
        cache_control: Some("3600".to_string()),
        overwrite: false,
    };

    store
        .put("uploads/u1/report.pdf", Bytes::from_static(b"one"), &options)
        .await
        .unwrap();

    // Same user, same name: refused without overwrite.
    let err = store
        .put("uploads/u1/report.pdf", Bytes::from_static(b"two"), &options)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(_)));

    // Another user's namespace is independent.
    store
        .put("uploads/u2/report.pdf", Bytes::from_static(b"two"), &options)
        .await
        .unwrap();

    let original = store.get("uploads/u1/report.pdf").await.unwrap().unwrap();
    assert_eq!(&original[..], b"one");
}

#[tokio::test]
async fn mem_store_honors_the_contract() {
    init_test_tracing();
    let store = MemStore::new();
    exercise_contract(&store).await;
}

#[tokio::test]
async fn fs_store_honors_the_contract() {
    init_test_tracing();
    let tmp = TempDir::new().unwrap();
    let store = FsStore::new(tmp.path().to_path_buf()).unwrap();
    exercise_contract(&store).await;

    // Keys map onto real per-user directories.
    assert!(tmp.path().join("uploads/u1/report.pdf").is_file());
    assert!(tmp.path().join("uploads/u2/report.pdf").is_file());
}

#[tokio::test]
async fn fs_store_reopens_existing_data() {
    init_test_tracing();
    let tmp = TempDir::new().unwrap();

    {
        let store = FsStore::new(tmp.path().to_path_buf()).unwrap();
        store
            .put(
                "uploads/u1/kept.pdf",
                Bytes::from_static(b"%PDF-1.4"),
                &PutOptions::default(),
            )
            .await
            .unwrap();
    }

    let reopened = FsStore::new(tmp.path().to_path_buf()).unwrap();
    assert_eq!(reopened.root(), tmp.path());
    assert!(reopened.root().join("uploads/u1/kept.pdf").is_file());

    let data = reopened.get("uploads/u1/kept.pdf").await.unwrap().unwrap();
    assert_eq!(&data[..], b"%PDF-1.4");
}

#[tokio::test]
async fn malformed_keys_are_rejected_by_both_backends() {
    init_test_tracing();
    let tmp = TempDir::new().unwrap();
    let fs = FsStore::new(tmp.path().to_path_buf()).unwrap();
    let mem = MemStore::new();

    for key in ["", "/abs.pdf", "uploads/../../etc/passwd"] {
        let err = mem
            .put(key, Bytes::new(), &PutOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)), "mem: {key:?}");

        let err = fs
            .put(key, Bytes::new(), &PutOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)), "fs: {key:?}");
    }
}
