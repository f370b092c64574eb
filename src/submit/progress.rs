//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or any other host) follow a submission pass without the
//! pass knowing how output is rendered.

use crate::geosubmit::SubmitError;
use async_trait::async_trait;
use std::fmt;

/// Submission pass phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading pending reports from the store
    Fetching,
    /// Choosing which reports go into this batch
    Selecting,
    /// Waiting on the remote submit call
    Dispatching,
    /// Marking the submitted batch uploaded
    Marking,
    /// Pass finished
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Fetching => "Reading pending reports",
            Self::Selecting => "Selecting batch",
            Self::Dispatching => "Sending reports",
            Self::Marking => "Marking reports uploaded",
            Self::Complete => "Done",
        };
        write!(f, "{s}")
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the batch is chosen
    async fn on_batch_selected(&self, selected: usize, pending: usize);

    /// Called when the submit call fails, with its classification
    async fn on_submit_failed(&self, error: &SubmitError, retryable: bool);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_batch_selected(&self, _selected: usize, _pending: usize) {}
    async fn on_submit_failed(&self, _error: &SubmitError, _retryable: bool) {}
    async fn on_message(&self, _message: &str) {}
}
