//! Selection state machines for the report view.
//!
//! Two small, explicitly enumerated machines instead of ad hoc booleans:
//! one for which report is active, one for which navigation section is
//! highlighted. Both are mutated only by explicit selection events and
//! hand their side effects back to the caller as plain values, which
//! keeps every transition auditable and unit-testable without any UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// Report Selection
// ============================================================================

/// Which report the operator is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Today's sessions (the only report with an aggregator attached)
    #[default]
    Daily,

    /// Placeholder, no aggregation in this version
    Weekly,

    /// Placeholder, no aggregation in this version
    Monthly,
}

impl ReportKind {
    /// Returns the display label for this report.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Side effect requested by a report selection transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSignal {
    /// Run the aggregator/projector pair and rebuild the view models.
    Refresh,

    /// The selected report has no aggregator attached; do not aggregate.
    NotImplemented(ReportKind),
}

/// Tracks which report is active and gates which aggregator runs.
///
/// Three states, initial state `Daily`, no terminal state. `select` is
/// unconditional and observably idempotent, but deliberately not
/// deduplicated: selecting `Daily` while already on `Daily` still asks
/// for a refresh, which is how a user-initiated reload works.
#[derive(Debug, Clone, Default)]
pub struct ReportSelectionController {
    active: ReportKind,
}

impl ReportSelectionController {
    /// Creates a controller in the initial `Daily` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently active report.
    pub fn active(&self) -> ReportKind {
        self.active
    }

    /// Moves to `report` and returns the side effect to perform.
    ///
    /// All transitions are externally triggered; there is no timer.
    pub fn select(&mut self, report: ReportKind) -> ReportSignal {
        debug!(from = %self.active, to = %report, "report selection");
        self.active = report;
        match report {
            ReportKind::Daily => ReportSignal::Refresh,
            ReportKind::Weekly | ReportKind::Monthly => ReportSignal::NotImplemented(report),
        }
    }
}

// ============================================================================
// Navigation Selection
// ============================================================================

/// Notification emitted on every navigation selection.
///
/// Consumed by the rendering layer for highlight styling. Emitted even
/// when the selected section was already active - callers needing dedup
/// compare against [`NavigationSelectionController::active`] themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Name of the newly active section
    pub section: String,
    /// Index of the section in the configured order
    pub index: usize,
}

/// Single-selection state machine over a fixed ordered set of sections.
///
/// The section set comes from configuration, never from this crate.
/// Initial state is the first configured section.
#[derive(Debug, Clone)]
pub struct NavigationSelectionController {
    sections: Vec<String>,
    active_index: usize,
}

impl NavigationSelectionController {
    /// Creates a controller over the given ordered section set.
    pub fn new(sections: Vec<String>) -> Self {
        Self {
            sections,
            active_index: 0,
        }
    }

    /// Returns the configured sections in order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Returns the index of the active section.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the name of the active section, if any are configured.
    pub fn active(&self) -> Option<&str> {
        self.sections.get(self.active_index).map(String::as_str)
    }

    /// Selects the section at `index` and emits the change notification.
    ///
    /// Reselecting the current section still emits. An index outside the
    /// configured set is rejected with `None` and leaves the state
    /// unchanged.
    pub fn select(&mut self, index: usize) -> Option<SelectionChanged> {
        let section = self.sections.get(index)?.clone();
        self.active_index = index;
        debug!(section = %section, index, "navigation selection");
        Some(SelectionChanged { section, index })
    }

    /// Selects a section by name. Unknown names are rejected with `None`.
    pub fn select_named(&mut self, name: &str) -> Option<SelectionChanged> {
        let index = self.sections.iter().position(|s| s == name)?;
        self.select(index)
    }
}
