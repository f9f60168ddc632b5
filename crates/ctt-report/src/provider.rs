//! Session provider seam.

use ctt_core::SessionRecord;
use thiserror::Error;

/// Errors surfaced by a session provider.
///
/// The report engine does not retry or back off; a failed fetch simply
/// propagates to the caller and the previous cached report stays valid.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The session store could not be reached or opened
    #[error("session store unavailable: {reason}")]
    Unavailable { reason: String },

    /// The store was reachable but the query failed
    #[error("session query failed: {reason}")]
    Query { reason: String },
}

/// Source of session records scoped to the current day.
///
/// Implemented outside this crate (the production implementation reads
/// the tracker's SQLite store). The contract is narrow:
///
/// - returned records already belong to the current day; the midnight
///   cutoff and timezone handling are the provider's concern,
/// - ordering is the provider's choice (the store returns most recently
///   active first) and is preserved downstream,
/// - no other filtering is assumed.
pub trait SessionProvider {
    /// Fetches the current day's session records.
    fn today_sessions(&self) -> Result<Vec<SessionRecord>, ProviderError>;
}
