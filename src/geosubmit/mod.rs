//! Geosubmit remote submission
//!
//! Wraps the ingestion endpoint behind [`RemoteSubmitter`] so the submission
//! pass can run against the real HTTP client or a test double.

mod client;
pub mod wire;

pub use client::GeosubmitClient;

use async_trait::async_trait;
use thiserror::Error;

/// Why a submit call failed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The service answered with a non-success status
    #[error("server returned HTTP {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Anything else: connection refused, bad response, ...
    #[error("{0}")]
    Other(String),
}

/// Whether a failed submit is worth retrying later
///
/// Timeouts usually mean we are temporarily offline, and 5xx is the server's
/// problem. Everything else would fail the same way again.
pub const fn is_retryable(error: &SubmitError) -> bool {
    match error {
        SubmitError::Timeout(_) => true,
        SubmitError::Status { code, .. } => matches!(*code, 500..=599),
        SubmitError::Other(_) => false,
    }
}

/// Remote side of a submission pass
///
/// One call submits the whole batch; it is either accepted as a unit or the
/// call fails.
#[async_trait]
pub trait RemoteSubmitter: Send + Sync {
    /// Submit a batch of reports
    async fn submit(&self, reports: &[wire::Report]) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> SubmitError {
        SubmitError::Status {
            code,
            body: String::new(),
        }
    }

    #[test]
    fn test_timeout_is_retryable() {
        assert!(is_retryable(&SubmitError::Timeout("read timed out".into())));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        for code in [500, 502, 503, 504, 599] {
            assert!(is_retryable(&status(code)), "{code} should be retryable");
        }
    }

    #[test]
    fn test_other_statuses_are_terminal() {
        for code in [400, 401, 403, 404, 413, 429, 499, 600] {
            assert!(!is_retryable(&status(code)), "{code} should be terminal");
        }
    }

    #[test]
    fn test_other_errors_are_terminal() {
        assert!(!is_retryable(&SubmitError::Other("connection refused".into())));
    }
}
