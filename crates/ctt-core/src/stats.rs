//! Daily summary statistics over a session collection.

use crate::session::SessionRecord;
use crate::status::{StatusCategory, StatusTaxonomy};
use serde::{Deserialize, Serialize};

/// Per-category counts for the daily summary panel.
///
/// `waiting_count` collapses the two waiting sub-states into a single
/// headline bucket. `Idle` and `Unknown` sessions are counted only in
/// `total`, so `working_count + completed_count + waiting_count <= total`
/// always holds, with equality exactly when no record is Idle or Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyStats {
    /// Total number of sessions in the window
    pub total: usize,
    /// Sessions actively working (incl. tool execution and subagents)
    pub working_count: usize,
    /// Sessions completed
    pub completed_count: usize,
    /// Sessions blocked on the user (decision or permission)
    pub waiting_count: usize,
}

impl DailyStats {
    /// Aggregates summary counts over a pre-filtered session collection.
    ///
    /// The provider guarantees the records already belong to the current
    /// day, so no time filtering happens here. Single pass, no I/O,
    /// order-independent: any permutation of the same records yields the
    /// same counts. Empty input yields all-zero stats.
    #[must_use]
    pub fn aggregate(taxonomy: &StatusTaxonomy, records: &[SessionRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;
            match taxonomy.classify(&record.current_status) {
                StatusCategory::Working => stats.working_count += 1,
                StatusCategory::Completed => stats.completed_count += 1,
                StatusCategory::WaitingForUser | StatusCategory::WaitingPermission => {
                    stats.waiting_count += 1
                }
                StatusCategory::Idle | StatusCategory::Unknown => {}
            }
        }
        stats
    }

    /// Sum of the headline buckets (everything except Idle/Unknown).
    #[must_use]
    pub fn headline_sum(&self) -> usize {
        self.working_count + self.completed_count + self.waiting_count
    }

    /// Number of sessions counted only in `total` (Idle or Unknown).
    #[must_use]
    pub fn unlisted_count(&self) -> usize {
        self.total.saturating_sub(self.headline_sum())
    }
}
