//! The client's screens.

pub mod upload;
pub mod visualization;
