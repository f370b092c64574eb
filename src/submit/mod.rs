//! Report submission engine
//!
//! A pass runs in two steps:
//! 1. Planning - pick the batch of pending reports to send
//! 2. Execution - submit the batch, then mark it uploaded or classify the failure

mod execute;
mod plan;
mod progress;

pub use execute::run_submission_pass;
pub use plan::{
    MIN_REPORTS_TO_SEND, SubmissionBatch, sample_size, select_batch, select_batch_with_rng,
};
pub use progress::{NoopProgress, Phase, ProgressCallback};
