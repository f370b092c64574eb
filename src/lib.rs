//! geosubmit-upload - batched report upload for Geosubmit v2
//!
//! Uploads locally stored geolocation observation reports to a remote
//! ingestion service. Each pass selects a batch of pending reports, submits
//! it in one request, marks the batch uploaded on success, and classifies
//! failures as retryable or terminal.

pub mod config;
pub mod error;
pub mod geosubmit;
pub mod store;
pub mod submit;
pub mod types;
