//! Screen state and views for the MedCo client.
//!
//! Elm architecture: each screen owns plain state, consumes a `Message`,
//! returns an `Action` for the shell to execute, and renders itself with
//! `view()`. No I/O happens in this crate, so every screen is testable
//! without a backend.

pub mod screens;
