//! History document - the persisted ordered sequence of transcript entries.

use super::entry::TranscriptEntry;
use serde::{Deserialize, Serialize};

/// The full persisted history. Insertion order is chronological order.
///
/// Owned exclusively by the history store; rewritten on every append,
/// clear, and restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub sessions: Vec<TranscriptEntry>,
}

impl HistoryDocument {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// The newest entry, if any.
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.sessions.last()
    }
}

/// A named archive copy of a history document, written by `save:<name>`.
///
/// Same shape as the live document plus save metadata; the live document
/// is left untouched by a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedSession {
    #[serde(flatten)]
    pub document: HistoryDocument,
    pub session_name: String,
    /// Human-readable session duration at save time, e.g. `1h 12m`.
    pub session_duration: String,
    /// ISO-8601 save timestamp.
    pub saved_at: String,
}
