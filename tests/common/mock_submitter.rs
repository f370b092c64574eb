//! Mock remote submitter for testing

#![allow(dead_code)]

use async_trait::async_trait;
use geosubmit_upload::geosubmit::{RemoteSubmitter, SubmitError, wire};
use std::sync::Mutex;

/// Mock submitter
///
/// Records every batch it is given and succeeds unless an error has been
/// injected with [`MockSubmitter::fail_with`].
pub struct MockSubmitter {
    batches: Mutex<Vec<Vec<wire::Report>>>,
    error: Mutex<Option<SubmitError>>,
}

impl MockSubmitter {
    /// Create a submitter that accepts everything
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            error: Mutex::new(None),
        }
    }

    /// Make `submit` fail with `error`
    pub fn fail_with(&self, error: SubmitError) {
        *self.error.lock().unwrap() = Some(error);
    }

    /// Make `submit` fail with an HTTP status
    pub fn fail_with_status(&self, code: u16) {
        self.fail_with(SubmitError::Status {
            code,
            body: String::new(),
        });
    }

    /// Every batch submitted so far
    pub fn get_batches(&self) -> Vec<Vec<wire::Report>> {
        self.batches.lock().unwrap().clone()
    }

    /// Number of submit calls
    pub fn call_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    /// Size of the only batch submitted
    pub fn single_batch_len(&self) -> usize {
        let batches = self.get_batches();
        assert_eq!(batches.len(), 1, "expected exactly one submit call");
        batches[0].len()
    }
}

#[async_trait]
impl RemoteSubmitter for MockSubmitter {
    async fn submit(&self, reports: &[wire::Report]) -> Result<(), SubmitError> {
        self.batches.lock().unwrap().push(reports.to_vec());

        if let Some(error) = self.error.lock().unwrap().as_ref() {
            return Err(error.clone());
        }
        Ok(())
    }
}
