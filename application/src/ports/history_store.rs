//! History store port
//!
//! Persistence interface for the history document and named archives.
//! Implementations read and fully rewrite the document on every mutation.
//! There is no file locking: the tool assumes exactly one writer per log
//! path, and two processes sharing a path may lose updates.

use thiserror::Error;
use tracing::warn;
use tribunal_domain::{ArchivedSession, HistoryDocument, TranscriptEntry, render_condensed};

/// Errors from history persistence.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed history document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistence for the history document and named archives.
pub trait HistoryStore: Send + Sync {
    /// Load the current document. A missing file yields an empty document.
    fn load(&self) -> Result<HistoryDocument, HistoryError>;

    /// Replace the entire persisted document.
    fn replace(&self, doc: &HistoryDocument) -> Result<(), HistoryError>;

    /// Append one entry via read-modify-write.
    fn append(&self, entry: TranscriptEntry) -> Result<(), HistoryError>;

    /// Write a named archive copy. Leaves the live document untouched.
    fn save_archive(&self, archive: &ArchivedSession) -> Result<(), HistoryError>;

    /// Condensed textual context: the trailing `max_chars` characters of the
    /// flattened transcript.
    ///
    /// Read failures degrade to an empty context rather than interrupting the
    /// caller - context is best-effort.
    fn read_condensed(&self, max_chars: usize) -> String {
        match self.load() {
            Ok(doc) => render_condensed(&doc, max_chars),
            Err(e) => {
                warn!("Could not read history for context: {}", e);
                String::new()
            }
        }
    }
}
