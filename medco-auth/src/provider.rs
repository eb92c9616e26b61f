//! The identity provider trait and the auth-change subscription handle.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::session::Session;

/// Errors surfaced by an identity provider.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The provider could not be reached or returned a malformed response.
    #[error("session fetch failed: {0}")]
    SessionFetch(String),
}

/// What kind of change an auth event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeKind {
    SignedIn,
    SignedOut,
}

/// One auth-change event.
///
/// `session` is the identity snapshot after the change; `None` means the
/// user is now signed out.
#[derive(Debug, Clone)]
pub struct AuthChange {
    pub kind: AuthChangeKind,
    pub session: Option<Session>,
}

/// External identity service: point-in-time session read plus a
/// change-notification stream.
///
/// Object-safe so the application shell can hold an injected
/// `Arc<dyn AuthProvider>` and tests can substitute a fake.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Fetch the current session. `Ok(None)` means signed out.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Register an auth-change subscription.
    ///
    /// Only events emitted after registration are delivered.
    fn subscribe(&self) -> AuthSubscription;
}

/// Handle to a registered auth-change subscription.
///
/// A scoped resource: acquired at mount, released via [`cancel`] at unmount
/// (or on drop). Cancellation is idempotent; cancelling an already-cancelled
/// handle is a no-op.
///
/// [`cancel`]: AuthSubscription::cancel
pub struct AuthSubscription {
    rx: Option<broadcast::Receiver<AuthChange>>,
}

impl AuthSubscription {
    pub fn new(rx: broadcast::Receiver<AuthChange>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Receive the next auth change.
    ///
    /// Returns `None` once the subscription has been cancelled or the
    /// provider has gone away. A lagged receiver skips the missed events and
    /// keeps going; the next read still reflects the latest state.
    pub async fn recv(&mut self) -> Option<AuthChange> {
        loop {
            let rx = self.rx.as_mut()?;
            match rx.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth subscription lagged, dropping missed events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.rx = None;
                    return None;
                }
            }
        }
    }

    /// Cancel the subscription. Safe to call more than once.
    pub fn cancel(&mut self) {
        if self.rx.take().is_some() {
            tracing::debug!("auth subscription cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.is_none()
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
