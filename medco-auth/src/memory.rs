//! In-memory identity provider for local single-user mode and tests.

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use crate::provider::{AuthChange, AuthChangeKind, AuthError, AuthProvider, AuthSubscription};
use crate::session::Session;

/// Capacity of the change fan-out; a slow subscriber lags rather than blocks.
const CHANGE_BUFFER: usize = 16;

/// An [`AuthProvider`] holding its session state in process memory.
///
/// `sign_in` / `sign_out` mutate the state and broadcast the change to every
/// live subscription. A fetch failure can be injected for testing the
/// degraded path.
pub struct MemoryAuthProvider {
    session: RwLock<Option<Session>>,
    changes: broadcast::Sender<AuthChange>,
    fail_fetch: RwLock<Option<String>>,
}

impl MemoryAuthProvider {
    /// Create a provider with nobody signed in.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            session: RwLock::new(None),
            changes,
            fail_fetch: RwLock::new(None),
        }
    }

    /// Create a provider with `session` already signed in.
    pub fn signed_in(session: Session) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            session: RwLock::new(Some(session)),
            changes,
            fail_fetch: RwLock::new(None),
        }
    }

    /// Sign a user in and notify subscribers.
    pub async fn sign_in(&self, session: Session) {
        tracing::info!(user_id = %session.user_id, "sign in");
        *self.session.write().await = Some(session.clone());
        let _ = self.changes.send(AuthChange {
            kind: AuthChangeKind::SignedIn,
            session: Some(session),
        });
    }

    /// Sign the current user out and notify subscribers.
    pub async fn sign_out(&self) {
        tracing::info!("sign out");
        *self.session.write().await = None;
        let _ = self.changes.send(AuthChange {
            kind: AuthChangeKind::SignedOut,
            session: None,
        });
    }

    /// Make subsequent `current_session` calls fail with `message`.
    pub async fn fail_fetch_with(&self, message: impl Into<String>) {
        *self.fail_fetch.write().await = Some(message.into());
    }

    /// Clear an injected fetch failure.
    pub async fn restore_fetch(&self) {
        *self.fail_fetch.write().await = None;
    }
}

impl Default for MemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        if let Some(message) = self.fail_fetch.read().await.clone() {
            return Err(AuthError::SessionFetch(message));
        }
        Ok(self.session.read().await.clone())
    }

    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.changes.subscribe())
    }
}
