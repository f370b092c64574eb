//! Report storage
//!
//! The submission pass only ever reads pending reports and marks a set of them
//! uploaded, so that is all the trait exposes.

mod json;

pub use json::JsonReportStore;

use crate::error::Result;
use crate::types::{Report, ReportId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage backend for observation reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Fetch every report that has not been uploaded yet (order unspecified)
    async fn fetch_pending_reports(&self) -> Result<Vec<Report>>;

    /// Mark exactly the given reports as uploaded at `uploaded_at`
    ///
    /// Must be all-or-nothing over `ids` and must not touch other reports.
    async fn mark_uploaded(&self, ids: &[ReportId], uploaded_at: DateTime<Utc>) -> Result<()>;
}
