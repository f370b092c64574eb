//! Shared helpers for integration tests

pub mod fixtures;
pub mod mock_store;
pub mod mock_submitter;
