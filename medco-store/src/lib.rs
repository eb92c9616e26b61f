//! Object storage contract for the MedCo client.
//!
//! Uploads go through the [`ObjectStore`] trait: a keyed binary write with
//! overwrite control. [`MemStore`] backs tests, [`FsStore`] backs local
//! mode; a cloud bucket would implement the same trait.

pub mod fs;
pub mod memory;
pub mod object;

pub use fs::FsStore;
pub use memory::MemStore;
pub use object::{ObjectStore, PutOptions, StoreError};
