//! Request History Domain Model
//!
//! Tracks executed requests together with the response they produced.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::RequestSpec;
use crate::response::ResponseSpec;

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 50;

/// A single entry in the request history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this entry.
    pub id: String,
    /// When the request was executed.
    pub timestamp: DateTime<Utc>,
    /// The exact request that was executed.
    pub request: RequestSpec,
    /// The resulting response, if execution produced one.
    pub response: Option<ResponseSpec>,
}

impl HistoryEntry {
    /// Creates a new history entry with a generated id.
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        request: RequestSpec,
        response: Option<ResponseSpec>,
    ) -> Self {
        Self {
            id: crate::generate_id(),
            timestamp,
            request,
            response,
        }
    }

    /// Returns a human-readable "time ago" string relative to `now`.
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let duration = now.signed_duration_since(self.timestamp);

        if duration.num_seconds() < 60 {
            "just now".to_string()
        } else if duration.num_minutes() < 60 {
            format!("{}m ago", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_days() < 7 {
            format!("{}d ago", duration.num_days())
        } else {
            self.timestamp.format("%Y-%m-%d").to_string()
        }
    }
}

/// Request history, newest first, never longer than [`HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestHistory {
    entries: VecDeque<HistoryEntry>,
}

impl RequestHistory {
    /// Creates a new empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Builds a history from stored entries (newest first), dropping any
    /// beyond the limit.
    #[must_use]
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    /// Adds an entry at the front, evicting the oldest past the limit.
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Returns all entries (newest first).
    #[must_use]
    pub const fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    /// Returns the entries as a vector for storage.
    #[must_use]
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Returns an entry by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Clears all history entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
