//! Cross-crate integration tests for the MedCo client.

mod helpers;

mod auth_lifecycle;
mod storage_contract;
mod upload_path;
