//! In-memory report store for testing

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geosubmit_upload::error::{Error, Result};
use geosubmit_upload::store::ReportStore;
use geosubmit_upload::types::{Report, ReportId};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Call record for `mark_uploaded`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkUploadedCall {
    pub ids: Vec<ReportId>,
    pub uploaded_at: DateTime<Utc>,
}

/// Mock report store
///
/// Features:
/// - Real mark-uploaded semantics over an in-memory list
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockReportStore {
    reports: Mutex<Vec<Report>>,
    fetch_calls: AtomicUsize,
    mark_calls: Mutex<Vec<MarkUploadedCall>>,
    error_on_fetch: Mutex<Option<String>>,
    error_on_mark: Mutex<Option<String>>,
}

impl MockReportStore {
    /// Create a store holding `reports`
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Mutex::new(reports),
            fetch_calls: AtomicUsize::new(0),
            mark_calls: Mutex::new(Vec::new()),
            error_on_fetch: Mutex::new(None),
            error_on_mark: Mutex::new(None),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self::with_reports(Vec::new())
    }

    // === Error injection methods ===

    /// Make `fetch_pending_reports` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `mark_uploaded` return an error
    pub fn fail_mark(&self, msg: &str) {
        *self.error_on_mark.lock().unwrap() = Some(msg.to_string());
    }

    /// Add a report behind the pass's back
    pub fn insert(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }

    // === Call verification methods ===

    /// Number of `fetch_pending_reports` calls
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// All `mark_uploaded` calls
    pub fn get_mark_calls(&self) -> Vec<MarkUploadedCall> {
        self.mark_calls.lock().unwrap().clone()
    }

    /// Snapshot of every stored report
    pub fn all_reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// IDs of reports marked uploaded
    pub fn uploaded_ids(&self) -> HashSet<ReportId> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.uploaded)
            .map(|r| r.id)
            .collect()
    }
}

#[async_trait]
impl ReportStore for MockReportStore {
    async fn fetch_pending_reports(&self) -> Result<Vec<Report>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error_on_fetch.lock().unwrap().as_ref() {
            return Err(Error::Storage(msg.clone()));
        }

        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_pending())
            .cloned()
            .collect())
    }

    async fn mark_uploaded(&self, ids: &[ReportId], uploaded_at: DateTime<Utc>) -> Result<()> {
        self.mark_calls.lock().unwrap().push(MarkUploadedCall {
            ids: ids.to_vec(),
            uploaded_at,
        });

        if let Some(msg) = self.error_on_mark.lock().unwrap().as_ref() {
            return Err(Error::Storage(msg.clone()));
        }

        let ids: HashSet<&ReportId> = ids.iter().collect();
        for report in self.reports.lock().unwrap().iter_mut() {
            if ids.contains(&report.id) {
                report.uploaded = true;
                report.uploaded_at = Some(uploaded_at);
            }
        }
        Ok(())
    }
}
