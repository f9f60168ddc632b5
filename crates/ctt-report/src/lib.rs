//! CTT Report - report orchestration over the core engine
//!
//! This crate sits between the session store and the rendering layer:
//! it owns the report/navigation selection state machines, pulls a
//! snapshot from the [`SessionProvider`] on each refresh, runs the
//! ctt-core aggregator and projector over it, and caches the resulting
//! view models for the renderer to paint.
//!
//! Everything is synchronous and single-owner: `refresh()` runs to
//! completion on the caller's thread, and the `&mut self` mutators
//! enforce the single-writer discipline in the type system.
//!
//! All code follows the panic-free policy: no `.unwrap()`, `.expect()`,
//! `panic!()`, `unreachable!()`, `todo!()`, or direct indexing `[i]`.

pub mod config;
pub mod provider;
pub mod report;
pub mod selection;

// Re-exports for convenience
pub use config::{ConfigError, ReportConfig, StatusMapping};
pub use provider::{ProviderError, SessionProvider};
pub use report::{DailyReport, ReportEngine, ReportError, ReportOutcome};
pub use selection::{
    NavigationSelectionController, ReportKind, ReportSelectionController, ReportSignal,
    SelectionChanged,
};
