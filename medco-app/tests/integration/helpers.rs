//! Shared test helpers.
//!
//! Re-exports from `medco_auth::testing` for convenience. All test
//! infrastructure is consolidated there to avoid duplication across crates.

pub use medco_auth::testing::{init_test_tracing, test_session};
