//! JSON file history store.
//!
//! The live transcript lives in one pretty-printed JSON document; every
//! mutation is a full read-modify-rewrite. Session archives go to a
//! `sessions/` directory next to the log file. Single-writer by assumption -
//! there is no file locking, and two concurrent processes on the same path
//! will lose writes.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tribunal_application::ports::history_store::{HistoryError, HistoryStore};
use tribunal_domain::{ArchivedSession, HistoryDocument, TranscriptEntry};

pub struct JsonHistoryStore {
    log_path: PathBuf,
    sessions_dir: PathBuf,
}

impl JsonHistoryStore {
    /// Store rooted at `log_path`; archives go to `sessions/` beside it.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        let log_path = log_path.into();
        let sessions_dir = match log_path.parent() {
            Some(parent) if parent != Path::new("") => parent.join("sessions"),
            _ => PathBuf::from("sessions"),
        };
        Self {
            log_path,
            sessions_dir,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn write_document(&self, doc: &HistoryDocument) -> Result<(), HistoryError> {
        if let Some(parent) = self.log_path.parent()
            && parent != Path::new("")
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.log_path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    /// A missing file is an empty history, not an error.
    fn load(&self) -> Result<HistoryDocument, HistoryError> {
        if !self.log_path.exists() {
            return Ok(HistoryDocument::default());
        }
        let content = fs::read_to_string(&self.log_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn replace(&self, doc: &HistoryDocument) -> Result<(), HistoryError> {
        debug!("Rewriting history ({} entries)", doc.len());
        self.write_document(doc)
    }

    fn append(&self, entry: TranscriptEntry) -> Result<(), HistoryError> {
        let mut doc = self.load()?;
        doc.sessions.push(entry);
        self.write_document(&doc)
    }

    fn save_archive(&self, archive: &ArchivedSession) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.sessions_dir)?;
        let path = self
            .sessions_dir
            .join(format!("{}.json", archive.session_name));
        let json = serde_json::to_string_pretty(archive)?;
        fs::write(&path, json)?;
        debug!("Archived session to {}", path.display());
        Ok(())
    }
}
