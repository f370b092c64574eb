//! Error types for geosubmit-upload

use thiserror::Error;

/// Crate-level error
///
/// Failures of the submit call itself are not represented here; they are
/// [`SubmitError`](crate::geosubmit::SubmitError)s and get classified inside
/// the submission pass instead of propagating.
#[derive(Debug, Error)]
pub enum Error {
    /// Report store could not be read or updated
    #[error("report store error: {0}")]
    Storage(String),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
