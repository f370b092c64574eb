//! Batch selection
//!
//! Decides which pending reports go into a pass. A sampled pass sends a third
//! of the backlog (but never fewer than [`MIN_REPORTS_TO_SEND`]), drawn
//! uniformly at random so a large backlog drains over several passes.

use crate::types::{Report, ReportId};
use rand::Rng;
use rand::seq::index;

/// Lower bound on the size of a sampled batch
pub const MIN_REPORTS_TO_SEND: usize = 100;

/// Reports chosen for one submission attempt
#[derive(Debug, Clone)]
pub struct SubmissionBatch {
    /// Selected reports (order is not meaningful)
    pub reports: Vec<Report>,
    /// How many reports were pending when the batch was drawn
    pub pending_count: usize,
}

impl SubmissionBatch {
    /// Number of selected reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Whether every pending report was selected
    pub fn is_complete(&self) -> bool {
        self.reports.len() == self.pending_count
    }

    /// IDs of the selected reports
    pub fn ids(&self) -> Vec<ReportId> {
        self.reports.iter().map(|r| r.id).collect()
    }
}

/// Size of a sampled batch for `pending` reports
pub const fn sample_size(pending: usize) -> usize {
    let third = pending / 3;
    if third > MIN_REPORTS_TO_SEND {
        third
    } else {
        MIN_REPORTS_TO_SEND
    }
}

/// Select the batch for this pass using the thread-local RNG
pub fn select_batch(pending: Vec<Report>, send_all: bool) -> SubmissionBatch {
    select_batch_with_rng(pending, send_all, &mut rand::rng())
}

/// Select the batch for this pass
///
/// Everything is selected when `send_all` is set or when the sample would
/// cover the whole backlog anyway.
pub fn select_batch_with_rng<R: Rng + ?Sized>(
    pending: Vec<Report>,
    send_all: bool,
    rng: &mut R,
) -> SubmissionBatch {
    let pending_count = pending.len();
    let amount = sample_size(pending_count);

    if send_all || amount >= pending_count {
        return SubmissionBatch {
            reports: pending,
            pending_count,
        };
    }

    let mut picked = vec![false; pending_count];
    for i in index::sample(rng, pending_count, amount).into_vec() {
        picked[i] = true;
    }

    let reports = pending
        .into_iter()
        .zip(picked)
        .filter_map(|(report, keep)| keep.then_some(report))
        .collect();

    SubmissionBatch {
        reports,
        pending_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn make_reports(n: usize) -> Vec<Report> {
        (0..n)
            .map(|_| Report::new(Utc::now(), Position::default()))
            .collect()
    }

    #[test]
    fn test_sample_size() {
        assert_eq!(sample_size(0), 100);
        assert_eq!(sample_size(90), 100);
        assert_eq!(sample_size(150), 100);
        assert_eq!(sample_size(300), 100);
        assert_eq!(sample_size(302), 100);
        assert_eq!(sample_size(303), 101);
        assert_eq!(sample_size(1000), 333);
    }

    #[test]
    fn test_send_all_selects_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = select_batch_with_rng(make_reports(1000), true, &mut rng);

        assert_eq!(batch.len(), 1000);
        assert!(batch.is_complete());
    }

    #[test]
    fn test_small_backlog_falls_back_to_all() {
        let mut rng = StdRng::seed_from_u64(2);

        let batch = select_batch_with_rng(make_reports(90), false, &mut rng);
        assert_eq!(batch.len(), 90);

        let batch = select_batch_with_rng(make_reports(100), false, &mut rng);
        assert_eq!(batch.len(), 100);
        assert!(batch.is_complete());
    }

    #[test]
    fn test_sampled_batch_is_distinct_subset() {
        let mut rng = StdRng::seed_from_u64(3);

        for (n, expected) in [(150, 100), (300, 100), (1200, 400)] {
            let pending = make_reports(n);
            let all_ids: HashSet<ReportId> = pending.iter().map(|r| r.id).collect();

            let batch = select_batch_with_rng(pending, false, &mut rng);
            let ids: HashSet<ReportId> = batch.ids().into_iter().collect();

            assert_eq!(batch.len(), expected);
            assert_eq!(batch.pending_count, n);
            assert_eq!(ids.len(), expected, "duplicates in batch");
            assert!(ids.is_subset(&all_ids));
            assert!(!batch.is_complete());
        }
    }

    #[test]
    fn test_draws_differ_between_passes() {
        let pending = make_reports(3000);
        let first: HashSet<ReportId> = select_batch(pending.clone(), false)
            .ids()
            .into_iter()
            .collect();
        let second: HashSet<ReportId> = select_batch(pending, false).ids().into_iter().collect();

        // 1000 of 3000 twice; identical draws are practically impossible
        assert_eq!(first.len(), 1000);
        assert_ne!(first, second);
    }
}
