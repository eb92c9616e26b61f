//! Auth-change subscription lifecycle: delivery, cancellation, teardown.

use medco_auth::{AuthChangeKind, AuthProvider, MemoryAuthProvider};

use crate::helpers::{init_test_tracing, test_session};

#[tokio::test]
async fn subscriber_sees_changes_in_order() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    let mut sub = provider.subscribe();

    provider.sign_in(test_session("u1", Some("Ann"))).await;
    provider.sign_out().await;
    provider.sign_in(test_session("u2", None)).await;

    let first = sub.recv().await.unwrap();
    assert_eq!(first.kind, AuthChangeKind::SignedIn);
    assert_eq!(first.session.unwrap().display_name_or_default(), "Ann");

    let second = sub.recv().await.unwrap();
    assert_eq!(second.kind, AuthChangeKind::SignedOut);
    assert!(second.session.is_none());

    let third = sub.recv().await.unwrap();
    // No profile metadata: the greeting falls back to "User".
    assert_eq!(third.session.unwrap().display_name_or_default(), "User");
}

#[tokio::test]
async fn two_subscribers_both_receive_events() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    let mut a = provider.subscribe();
    let mut b = provider.subscribe();

    provider.sign_in(test_session("u1", None)).await;

    assert_eq!(a.recv().await.unwrap().kind, AuthChangeKind::SignedIn);
    assert_eq!(b.recv().await.unwrap().kind, AuthChangeKind::SignedIn);
}

#[tokio::test]
async fn double_cancel_is_harmless() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    let mut sub = provider.subscribe();

    sub.cancel();
    sub.cancel();
    assert!(sub.is_cancelled());
    assert!(sub.recv().await.is_none());
}

#[tokio::test]
async fn cancelled_subscriber_does_not_block_others() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    let mut cancelled = provider.subscribe();
    let mut live = provider.subscribe();

    cancelled.cancel();
    provider.sign_in(test_session("u1", None)).await;

    assert!(cancelled.recv().await.is_none());
    assert!(live.recv().await.is_some());
}

#[tokio::test]
async fn provider_teardown_closes_the_stream() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    let mut sub = provider.subscribe();

    provider.sign_in(test_session("u1", None)).await;
    drop(provider);

    // The buffered event is still delivered, then the stream ends.
    assert!(sub.recv().await.is_some());
    assert!(sub.recv().await.is_none());
}

#[tokio::test]
async fn current_session_reflects_the_latest_change() {
    init_test_tracing();
    let provider = MemoryAuthProvider::new();
    assert!(provider.current_session().await.unwrap().is_none());

    provider.sign_in(test_session("u1", Some("Ann"))).await;
    let session = provider.current_session().await.unwrap().unwrap();
    assert_eq!(session.user_id.as_str(), "u1");

    provider.sign_out().await;
    assert!(provider.current_session().await.unwrap().is_none());
}
