//! Identity contract for the MedCo client.
//!
//! The application never talks to an identity backend directly; it goes
//! through the [`AuthProvider`] trait, which exposes a point-in-time session
//! read and an auth-change subscription. [`MemoryAuthProvider`] implements
//! the contract in-process for local mode and tests.

pub mod memory;
pub mod provider;
pub mod session;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use memory::MemoryAuthProvider;
pub use provider::{AuthChange, AuthChangeKind, AuthError, AuthProvider, AuthSubscription};
pub use session::{Session, UserId, DEFAULT_DISPLAY_NAME};
