//! Report engine: snapshot in, view models out.

use crate::config::ReportConfig;
use crate::provider::{ProviderError, SessionProvider};
use crate::selection::{
    NavigationSelectionController, ReportKind, ReportSelectionController, ReportSignal,
};
use chrono::{DateTime, Utc};
use ctt_core::{DailyStats, SessionListProjector, SessionRow, StatusTaxonomy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Errors from running a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The session provider failed to deliver a snapshot
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// The complete view model for the daily report.
///
/// Built wholesale from one provider snapshot; the rendering layer does
/// a full redraw from it rather than patching the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Summary counts for the stats panel
    pub stats: DailyStats,
    /// Ordered rows for the session list
    pub rows: Vec<SessionRow>,
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
}

/// Outcome of a report selection event.
#[derive(Debug, PartialEq, Eq)]
pub enum ReportOutcome<'a> {
    /// The daily report was rebuilt from a fresh snapshot.
    Refreshed(&'a DailyReport),

    /// The selected report has no aggregator in this version.
    NotImplemented(ReportKind),
}

/// Drives the daily report: owns the provider seam, the classification
/// taxonomy, the projector, both selection machines, and the cached view
/// model for the current selection.
///
/// Synchronous and demand-driven: nothing happens until the host calls
/// [`refresh`](Self::refresh) or [`select_report`](Self::select_report),
/// and each call runs to completion on the caller's thread. The `&mut
/// self` receivers are the single-writer discipline - there is no shared
/// mutable state to lock.
#[derive(Debug)]
pub struct ReportEngine<P> {
    provider: P,
    taxonomy: StatusTaxonomy,
    projector: SessionListProjector,
    selection: ReportSelectionController,
    navigation: NavigationSelectionController,
    cached: Option<DailyReport>,
}

impl<P: SessionProvider> ReportEngine<P> {
    /// Creates an engine over `provider` with default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, &ReportConfig::default())
    }

    /// Creates an engine over `provider` with the given configuration.
    pub fn with_config(provider: P, config: &ReportConfig) -> Self {
        Self {
            provider,
            taxonomy: config.taxonomy(),
            projector: config.projector(),
            selection: ReportSelectionController::new(),
            navigation: config.navigation(),
            cached: None,
        }
    }

    /// Rebuilds the daily report from a fresh provider snapshot.
    ///
    /// Captures one immutable snapshot, runs aggregation and projection
    /// over that same snapshot, and replaces the cached report wholesale.
    /// On provider failure the previous cached report is left intact.
    pub fn refresh(&mut self) -> Result<&DailyReport, ReportError> {
        let records = self.provider.today_sessions()?;
        let stats = DailyStats::aggregate(&self.taxonomy, &records);
        let rows = self.projector.project(&self.taxonomy, &records);
        info!(
            total = stats.total,
            working = stats.working_count,
            completed = stats.completed_count,
            waiting = stats.waiting_count,
            "daily report refreshed"
        );
        Ok(self.cached.insert(DailyReport {
            stats,
            rows,
            generated_at: Utc::now(),
        }))
    }

    /// Handles a report selection event from the host.
    ///
    /// Entering `Daily` (including reselecting it) triggers a refresh;
    /// `Weekly`/`Monthly` are placeholders and never reach the
    /// aggregator, leaving the cached daily report untouched.
    pub fn select_report(&mut self, report: ReportKind) -> Result<ReportOutcome<'_>, ReportError> {
        match self.selection.select(report) {
            ReportSignal::Refresh => self.refresh().map(ReportOutcome::Refreshed),
            ReportSignal::NotImplemented(kind) => {
                warn!(report = %kind, "report not implemented");
                Ok(ReportOutcome::NotImplemented(kind))
            }
        }
    }

    /// Returns the most recently built report, if any.
    pub fn latest(&self) -> Option<&DailyReport> {
        self.cached.as_ref()
    }

    /// Returns the currently selected report.
    pub fn active_report(&self) -> ReportKind {
        self.selection.active()
    }

    /// Read access to the navigation machine (highlight state).
    pub fn navigation(&self) -> &NavigationSelectionController {
        &self.navigation
    }

    /// Mutable access to the navigation machine for selection events.
    pub fn navigation_mut(&mut self) -> &mut NavigationSelectionController {
        &mut self.navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctt_core::SessionRecord;
    use std::cell::Cell;

    /// Provider that serves a fixed record set and counts fetches.
    struct FixedProvider {
        records: Vec<SessionRecord>,
        fetches: Cell<u32>,
    }

    impl FixedProvider {
        fn new(records: Vec<SessionRecord>) -> Self {
            Self {
                records,
                fetches: Cell::new(0),
            }
        }
    }

    impl SessionProvider for FixedProvider {
        fn today_sessions(&self) -> Result<Vec<SessionRecord>, ProviderError> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(self.records.clone())
        }
    }

    /// Provider that always fails.
    struct BrokenProvider;

    impl SessionProvider for BrokenProvider {
        fn today_sessions(&self) -> Result<Vec<SessionRecord>, ProviderError> {
            Err(ProviderError::Unavailable {
                reason: "store offline".to_string(),
            })
        }
    }

    fn record(id: &str, goal: &str, status: &str) -> SessionRecord {
        SessionRecord::new(id, "proj", goal, status)
    }

    #[test]
    fn test_refresh_builds_stats_and_rows() {
        let provider = FixedProvider::new(vec![
            record("s1", "write tests", "working"),
            record("s2", "ship release", "completed"),
        ]);
        let mut engine = ReportEngine::new(provider);

        let report = engine.refresh().expect("refresh");
        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.working_count, 1);
        assert_eq!(report.stats.completed_count, 1);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].excerpt, "write tests");
    }

    #[test]
    fn test_latest_is_none_before_first_refresh() {
        let engine = ReportEngine::new(FixedProvider::new(Vec::new()));
        assert!(engine.latest().is_none());
    }

    #[test]
    fn test_refresh_replaces_cache_wholesale() {
        let provider = FixedProvider::new(vec![record("s1", "goal", "idle")]);
        let mut engine = ReportEngine::new(provider);

        engine.refresh().expect("first refresh");
        engine.refresh().expect("second refresh");
        let latest = engine.latest().expect("cached report");
        assert_eq!(latest.stats.total, 1);
        assert_eq!(latest.rows.len(), 1);
    }

    #[test]
    fn test_select_daily_fetches_every_time() {
        let provider = FixedProvider::new(Vec::new());
        let mut engine = ReportEngine::new(provider);

        engine.select_report(ReportKind::Daily).expect("first select");
        engine.select_report(ReportKind::Daily).expect("second select");
        assert_eq!(engine.provider.fetches.get(), 2);
    }

    #[test]
    fn test_weekly_and_monthly_skip_the_aggregator() {
        let provider = FixedProvider::new(vec![record("s1", "goal", "working")]);
        let mut engine = ReportEngine::new(provider);
        engine.refresh().expect("seed cache");

        let outcome = engine.select_report(ReportKind::Weekly).expect("select weekly");
        assert_eq!(outcome, ReportOutcome::NotImplemented(ReportKind::Weekly));
        let outcome = engine.select_report(ReportKind::Monthly).expect("select monthly");
        assert_eq!(outcome, ReportOutcome::NotImplemented(ReportKind::Monthly));

        // One fetch from the seed refresh, none from the placeholders
        assert_eq!(engine.provider.fetches.get(), 1);
        // Cached daily report untouched
        assert_eq!(engine.latest().map(|r| r.stats.total), Some(1));
        assert_eq!(engine.active_report(), ReportKind::Monthly);
    }

    #[test]
    fn test_provider_failure_propagates_and_keeps_cache() {
        let mut engine = ReportEngine::new(BrokenProvider);
        let err = engine.refresh().expect_err("should fail");
        assert!(matches!(err, ReportError::Provider(ProviderError::Unavailable { .. })));
        assert!(engine.latest().is_none());
    }

    #[test]
    fn test_navigation_is_configured_and_mutable() {
        let mut engine = ReportEngine::new(FixedProvider::new(Vec::new()));
        assert_eq!(engine.navigation().active(), Some("today"));
        let change = engine.navigation_mut().select(1).expect("valid index");
        assert_eq!(change.section, "sessions");
    }
}
