//! Submission pass execution
//!
//! One pass: read pending reports, pick a batch, submit it, and either mark
//! it uploaded or classify the failure.

use crate::error::Result;
use crate::geosubmit::{RemoteSubmitter, is_retryable, wire};
use crate::store::ReportStore;
use crate::submit::{Phase, ProgressCallback, select_batch};
use crate::types::SubmissionOutcome;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Run one submission pass
///
/// With `send_all` unset only a sample of the backlog is submitted (see
/// [`select_batch`]). The store is written only after the submitter confirms
/// the whole batch, and only for the reports in that batch. Store errors are
/// returned as-is; submit errors are classified into the outcome.
pub async fn run_submission_pass(
    store: &dyn ReportStore,
    submitter: &dyn RemoteSubmitter,
    progress: &dyn ProgressCallback,
    send_all: bool,
) -> Result<SubmissionOutcome> {
    progress.on_phase(Phase::Fetching).await;
    let pending = store.fetch_pending_reports().await?;

    if pending.is_empty() {
        info!("No Geosubmit reports to send");
        progress.on_message("No reports to upload").await;
        progress.on_phase(Phase::Complete).await;
        return Ok(SubmissionOutcome::NoWorkNeeded);
    }

    progress.on_phase(Phase::Selecting).await;
    let batch = select_batch(pending, send_all);
    debug!(
        "Selected {} of {} pending reports (send_all: {})",
        batch.len(),
        batch.pending_count,
        send_all
    );
    progress
        .on_batch_selected(batch.len(), batch.pending_count)
        .await;

    let payload: Vec<wire::Report> = batch.reports.iter().map(wire::Report::from).collect();

    progress.on_phase(Phase::Dispatching).await;
    let started = Instant::now();

    match submitter.submit(&payload).await {
        Ok(()) => {
            let elapsed = started.elapsed();
            let uploaded_at = Utc::now();

            progress.on_phase(Phase::Marking).await;
            store.mark_uploaded(&batch.ids(), uploaded_at).await?;

            info!(
                "Successfully sent {} reports in {:.2}s",
                payload.len(),
                elapsed.as_secs_f64()
            );
            progress.on_phase(Phase::Complete).await;
            Ok(SubmissionOutcome::Succeeded)
        }
        Err(e) => {
            let retryable = is_retryable(&e);
            warn!("Failed to send Geosubmit reports (retryable: {retryable}): {e}");
            progress.on_submit_failed(&e, retryable).await;

            Ok(if retryable {
                SubmissionOutcome::RetryableFailure
            } else {
                SubmissionOutcome::TerminalFailure
            })
        }
    }
}
