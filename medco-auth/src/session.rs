//! Session snapshots: who is signed in right now.

use serde::{Deserialize, Serialize};

/// Fallback greeting name for sessions without profile metadata.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Opaque stable identifier for an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Point-in-time snapshot of the authenticated identity.
///
/// Produced by an [`AuthProvider`](crate::AuthProvider) on sign-in and
/// invalidated on sign-out. Consumers read it, never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    /// Profile display name, absent when the account carries no metadata.
    pub display_name: Option<String>,
}

impl Session {
    /// Create a session with no profile metadata.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: UserId(user_id.into()),
            display_name: None,
        }
    }

    /// Attach a profile display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Display name with the [`DEFAULT_DISPLAY_NAME`] fallback.
    pub fn display_name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}
