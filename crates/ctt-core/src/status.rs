//! Status taxonomy: raw status strings to lifecycle categories.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

// ============================================================================
// Status Category (Closed Lifecycle Set)
// ============================================================================

/// Lifecycle category of a session.
///
/// The closed, mutually exclusive set of states a session can occupy in
/// the daily report. Every raw status string maps to exactly one of these;
/// anything the taxonomy does not recognize lands in `Unknown` rather
/// than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Claude is actively processing (includes tool execution and subagents).
    Working,

    /// Nothing happening - session open, waiting for the user's next prompt.
    Idle,

    /// Blocked on a user decision (question, pending choice).
    WaitingForUser,

    /// Blocked on a permission confirmation.
    WaitingPermission,

    /// Session finished.
    Completed,

    /// Status string not recognized by the taxonomy.
    #[default]
    Unknown,
}

impl StatusCategory {
    /// Returns the presentation-agnostic glyph for this category.
    #[must_use]
    pub fn glyph(&self) -> StatusGlyph {
        match self {
            Self::Working => StatusGlyph::Active,
            Self::Idle => StatusGlyph::Idle,
            Self::WaitingForUser => StatusGlyph::BlockedUser,
            Self::WaitingPermission => StatusGlyph::BlockedPermission,
            Self::Completed => StatusGlyph::Done,
            Self::Unknown => StatusGlyph::Unknown,
        }
    }

    /// Returns true if this category blocks on user action.
    ///
    /// The two waiting sub-states are collapsed into one summary bucket
    /// by the stats, but stay distinct here and in the glyph.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::WaitingForUser | Self::WaitingPermission)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Working => write!(f, "Working"),
            Self::Idle => write!(f, "Idle"),
            Self::WaitingForUser => write!(f, "Waiting for User"),
            Self::WaitingPermission => write!(f, "Waiting for Permission"),
            Self::Completed => write!(f, "Completed"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// ============================================================================
// Status Glyph
// ============================================================================

/// Symbolic status indicator for a session row.
///
/// Deliberately not a rendered icon: the rendering layer picks whatever
/// visual encoding it wants (color, emoji, ASCII) per glyph, so the core
/// never knows about pixels or themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusGlyph {
    /// Session is actively working
    Active,
    /// Session is idle
    Idle,
    /// Blocked on a user decision
    BlockedUser,
    /// Blocked on a permission prompt
    BlockedPermission,
    /// Session completed
    Done,
    /// Unrecognized status
    Unknown,
}

impl StatusGlyph {
    /// Returns the stable string label for this glyph.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::BlockedUser => "blocked-user",
            Self::BlockedPermission => "blocked-permission",
            Self::Done => "done",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Status Taxonomy
// ============================================================================

/// Classification table from raw status strings to categories.
///
/// The raw vocabulary is open-ended (hooks in newer Claude Code versions
/// may report statuses we have never seen), so this is a lookup table
/// with an explicit default arm: adding a status is a one-entry table
/// edit, and anything unlisted classifies as [`StatusCategory::Unknown`].
#[derive(Debug, Clone)]
pub struct StatusTaxonomy {
    table: HashMap<String, StatusCategory>,
}

impl StatusTaxonomy {
    /// Builds a taxonomy from explicit table entries.
    ///
    /// Later entries win on duplicate status strings.
    pub fn from_table<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, StatusCategory)>,
        S: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(raw, category)| (raw.into(), category))
            .collect();
        Self { table }
    }

    /// Extends the table with additional entries, overriding duplicates.
    ///
    /// Used to layer configured status mappings over the default table.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, StatusCategory)>,
        S: Into<String>,
    {
        for (raw, category) in entries {
            self.table.insert(raw.into(), category);
        }
    }

    /// Classifies a raw status string into its lifecycle category.
    ///
    /// Pure and total: never fails. Strings outside the table map to
    /// `Unknown` so a new hook vocabulary degrades gracefully instead of
    /// breaking the report.
    #[must_use]
    pub fn classify(&self, raw_status: &str) -> StatusCategory {
        match self.table.get(raw_status) {
            Some(category) => *category,
            None => {
                debug!(raw_status, "unrecognized session status");
                StatusCategory::Unknown
            }
        }
    }

    /// Returns the glyph for a raw status string.
    ///
    /// Same partitioning as [`classify`](Self::classify); unrecognized
    /// input yields [`StatusGlyph::Unknown`].
    #[must_use]
    pub fn glyph(&self, raw_status: &str) -> StatusGlyph {
        self.classify(raw_status).glyph()
    }

    /// Number of raw statuses the table recognizes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table is empty (everything classifies Unknown).
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for StatusTaxonomy {
    /// The status vocabulary written by the tracking hooks.
    fn default() -> Self {
        Self::from_table([
            ("working", StatusCategory::Working),
            ("executing_tool", StatusCategory::Working),
            ("subagent_working", StatusCategory::Working),
            ("idle", StatusCategory::Idle),
            ("waiting_for_user", StatusCategory::WaitingForUser),
            ("waiting_permission", StatusCategory::WaitingPermission),
            ("completed", StatusCategory::Completed),
        ])
    }
}
