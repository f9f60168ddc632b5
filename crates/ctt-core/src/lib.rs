//! CTT Core - Session classification and daily report engine
//!
//! This crate provides the pure domain logic behind the task tracker's
//! daily activity report: classifying raw session status strings into a
//! closed set of lifecycle categories, aggregating per-category counts,
//! and projecting session records into a display-ready row model.
//!
//! Everything here is synchronous, side-effect free, and independent of
//! how the report is rendered. The rendering layer and the session store
//! live elsewhere and talk to this crate through plain data types.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod session;
pub mod stats;
pub mod status;
pub mod view;

// Re-exports for convenience
pub use session::{SessionId, SessionRecord};
pub use stats::DailyStats;
pub use status::{StatusCategory, StatusGlyph, StatusTaxonomy};
pub use view::{SessionListProjector, SessionRow, DEFAULT_EXCERPT_LENGTH};
