//! Session record entities and value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type-Safe Identifiers
// ============================================================================

/// Unique identifier for a Claude Code session.
///
/// Wraps a UUID string (e.g., "8e11bfb5-7dc2-432b-9206-928fa5c35731")
/// assigned by Claude Code and recorded by the tracking hooks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from a string.
    ///
    /// Note: This does not validate UUID format. The session store
    /// provides the id, so we trust its format.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a shortened display form (first 8 characters).
    ///
    /// Useful for compact list display.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Session Record
// ============================================================================

/// A raw session record as handed over by the session provider.
///
/// Read-only to this crate: records are produced by the external store
/// (the hooks write them, the provider reads them back) and only ever
/// classified, counted, and projected here.
///
/// `current_status` is always a non-empty string, but its vocabulary is
/// open-ended - hooks from newer Claude Code versions may report statuses
/// this crate has never seen. Classification handles that with a total
/// fallback rather than an error (see [`crate::StatusTaxonomy`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Session identifier
    pub id: SessionId,

    /// Project the session runs in (directory name)
    pub project: String,

    /// The user's original goal text for this session
    pub original_goal: String,

    /// Raw status string, e.g. "working", "waiting_permission"
    pub current_status: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub last_activity: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record with the given id, goal, and status, stamped now.
    pub fn new(
        id: impl Into<SessionId>,
        project: impl Into<String>,
        original_goal: impl Into<String>,
        current_status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            project: project.into(),
            original_goal: original_goal.into(),
            current_status: current_status.into(),
            created_at: now,
            last_activity: now,
        }
    }

    /// Returns time since last activity.
    pub fn time_since_activity(&self) -> chrono::Duration {
        Utc::now().signed_duration_since(self.last_activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_short() {
        let id = SessionId::new("8e11bfb5-7dc2-432b-9206-928fa5c35731");
        assert_eq!(id.short(), "8e11bfb5");
    }

    #[test]
    fn test_session_id_short_short_id() {
        let id = SessionId::new("abc");
        assert_eq!(id.short(), "abc");
    }

    #[test]
    fn test_session_record_creation() {
        let record = SessionRecord::new("test-123", "myproj", "fix the parser", "working");
        assert_eq!(record.id.as_str(), "test-123");
        assert_eq!(record.project, "myproj");
        assert_eq!(record.current_status, "working");
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn test_session_record_serde_round_trip() {
        let record = SessionRecord::new("rt-1", "proj", "goal text", "idle");
        let json = serde_json::to_string(&record).expect("serialize");
        let back: SessionRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}
