//! Shared test utilities for medco tests.
//!
//! Available behind the `test-util` feature or in `#[cfg(test)]` within
//! medco-auth, so integration tests across the workspace share one set of
//! helpers.

use crate::session::Session;

/// Initialise a tracing subscriber for tests.
///
/// Respects the `RUST_LOG` environment variable, defaults to `debug`.
/// Uses `with_test_writer()` to integrate with `cargo test` output capture.
/// Safe to call multiple times — subsequent calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Build a session for tests, with optional profile metadata.
pub fn test_session(user_id: &str, display_name: Option<&str>) -> Session {
    match display_name {
        Some(name) => Session::new(user_id).with_display_name(name),
        None => Session::new(user_id),
    }
}
