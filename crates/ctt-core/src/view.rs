//! Display-ready row model for the session list.

use crate::session::{SessionId, SessionRecord};
use crate::status::{StatusCategory, StatusGlyph, StatusTaxonomy};
use serde::{Deserialize, Serialize};

/// Default goal excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 50;

/// Read-only view of one session for the list panel.
///
/// Immutable snapshot created per refresh and discarded wholesale on the
/// next one; never persisted, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRow {
    /// Session identifier
    pub id: SessionId,

    /// Symbolic status indicator
    pub glyph: StatusGlyph,

    /// Truncated goal text
    pub excerpt: String,

    /// Lifecycle category of the session
    pub category: StatusCategory,
}

/// Projects raw session records into display-ready rows.
///
/// Order is the provider's business (it hands records back
/// reverse-chronologically); this projector preserves it verbatim and
/// never re-sorts. It also enforces no upper bound on the list length -
/// scroll windowing belongs to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionListProjector {
    truncation: usize,
}

impl SessionListProjector {
    /// Creates a projector with a custom excerpt length (in characters).
    pub fn new(truncation: usize) -> Self {
        Self { truncation }
    }

    /// Returns the configured excerpt length.
    pub fn truncation(&self) -> usize {
        self.truncation
    }

    /// Builds the ordered row model for a session collection.
    ///
    /// Pure and deterministic: same input, same rows, same order.
    /// An empty goal yields an empty excerpt, not an error.
    #[must_use]
    pub fn project(&self, taxonomy: &StatusTaxonomy, records: &[SessionRecord]) -> Vec<SessionRow> {
        records
            .iter()
            .map(|record| {
                let category = taxonomy.classify(&record.current_status);
                SessionRow {
                    id: record.id.clone(),
                    glyph: category.glyph(),
                    excerpt: excerpt(&record.original_goal, self.truncation),
                    category,
                }
            })
            .collect()
    }
}

impl Default for SessionListProjector {
    fn default() -> Self {
        Self::new(DEFAULT_EXCERPT_LENGTH)
    }
}

/// Returns the first `max_chars` characters of `text`.
///
/// Counts characters, not bytes, so multibyte goal text never gets cut
/// mid-codepoint. Shorter strings pass through unchanged.
fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text.get(..byte_idx).unwrap_or(text).to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, goal: &str, status: &str) -> SessionRecord {
        SessionRecord::new(id, "proj", goal, status)
    }

    #[test]
    fn test_empty_input_projects_empty() {
        let projector = SessionListProjector::default();
        let rows = projector.project(&StatusTaxonomy::default(), &[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_order_preserved_verbatim() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let records = vec![
            record("s3", "third", "idle"),
            record("s1", "first", "working"),
            record("s2", "second", "completed"),
        ];
        let rows = projector.project(&taxonomy, &records);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["s3", "s1", "s2"]);
    }

    #[test]
    fn test_excerpt_truncates_at_fifty_chars() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let goal: String = "x".repeat(60);
        let rows = projector.project(&taxonomy, &[record("s1", &goal, "working")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].excerpt.chars().count(), 50);
        assert!(goal.starts_with(&rows[0].excerpt));
        assert_eq!(rows[0].category, StatusCategory::Working);
    }

    #[test]
    fn test_shorter_goal_passes_through_unchanged() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let rows = projector.project(&taxonomy, &[record("s1", "short goal", "idle")]);
        assert_eq!(rows[0].excerpt, "short goal");
    }

    #[test]
    fn test_exact_boundary_goal_is_untouched() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let goal: String = "y".repeat(50);
        let rows = projector.project(&taxonomy, &[record("s1", &goal, "idle")]);
        assert_eq!(rows[0].excerpt, goal);
    }

    #[test]
    fn test_empty_goal_yields_empty_excerpt() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let rows = projector.project(&taxonomy, &[record("s1", "", "working")]);
        assert_eq!(rows[0].excerpt, "");
    }

    #[test]
    fn test_multibyte_goal_truncates_by_characters() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::new(3);
        let rows = projector.project(&taxonomy, &[record("s1", "重构解析器模块", "working")]);
        assert_eq!(rows[0].excerpt, "重构解");
        assert_eq!(rows[0].excerpt.chars().count(), 3);
    }

    #[test]
    fn test_truncation_law_prefix_and_length() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let goals = vec![
            String::new(),
            "a".to_string(),
            "b".repeat(49),
            "c".repeat(50),
            "d".repeat(51),
            "e".repeat(200),
        ];
        for goal in &goals {
            let rows = projector.project(&taxonomy, &[record("s", goal, "idle")]);
            let excerpt = &rows[0].excerpt;
            assert_eq!(excerpt.chars().count(), goal.chars().count().min(50));
            assert!(goal.starts_with(excerpt.as_str()));
        }
    }

    #[test]
    fn test_glyph_follows_category() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let records = vec![
            record("s1", "g", "waiting_for_user"),
            record("s2", "g", "waiting_permission"),
            record("s3", "g", "never_heard_of_it"),
        ];
        let rows = projector.project(&taxonomy, &records);
        assert_eq!(rows[0].glyph, StatusGlyph::BlockedUser);
        assert_eq!(rows[1].glyph, StatusGlyph::BlockedPermission);
        assert_eq!(rows[2].glyph, StatusGlyph::Unknown);
        assert_eq!(rows[2].category, StatusCategory::Unknown);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let taxonomy = StatusTaxonomy::default();
        let projector = SessionListProjector::default();
        let records = vec![record("s1", "goal one", "working"), record("s2", "goal two", "idle")];
        assert_eq!(
            projector.project(&taxonomy, &records),
            projector.project(&taxonomy, &records)
        );
    }
}
