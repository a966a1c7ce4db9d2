//! Clock port

use chrono::{DateTime, Utc};

/// Source of wall-clock timestamps for history entries.
///
/// Elapsed request time is measured with a monotonic `Instant` instead; this
/// port only stamps when something happened.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
