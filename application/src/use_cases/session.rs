//! Session lifecycle - clear, undo, save, and the bits of session state the
//! interactive surface shows (duration, recent topics).

use crate::ports::history_store::{HistoryError, HistoryStore};
use chrono::Local;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use tribunal_domain::{
    ArchivedSession, HistoryDocument, SessionContext, TranscriptEntry, truncate_str,
};

/// Recent-topic preview length, in bytes, before the ellipsis.
const TOPIC_CHARS: usize = 60;

#[derive(Debug, Error)]
pub enum UndoError {
    #[error("No cleared session to restore")]
    NothingToRestore,
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Owns the session clock and the single-slot clear/undo backup.
pub struct SessionManager {
    store: Arc<dyn HistoryStore>,
    context: SessionContext,
}

impl SessionManager {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self::with_context(store, SessionContext::new())
    }

    pub fn with_context(store: Arc<dyn HistoryStore>, context: SessionContext) -> Self {
        Self { store, context }
    }

    /// Timestamp-derived identifier for this session, e.g. `20260830_143015`.
    pub fn session_id(&self) -> String {
        self.context.session_id()
    }

    /// Elapsed session time, e.g. `12m` or `2h 5m`.
    pub fn duration(&self) -> String {
        self.context.duration()
    }

    pub fn has_backup(&self) -> bool {
        self.context.has_backup()
    }

    /// Clear the live history, keeping a backup for one subsequent undo.
    ///
    /// Each clear overwrites the backup slot; only the most recent cleared
    /// state can be restored.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        let current = self.store.load()?;
        self.context.stash_backup(current);
        self.store.replace(&HistoryDocument::default())?;
        info!("History cleared; backup stashed");
        Ok(())
    }

    /// Restore the history cleared last. Consumes the backup either way.
    ///
    /// Returns the number of restored entries.
    pub fn undo(&mut self) -> Result<usize, UndoError> {
        let backup = self
            .context
            .take_backup()
            .ok_or(UndoError::NothingToRestore)?;
        self.store.replace(&backup)?;
        info!("History restored from backup ({} entries)", backup.len());
        Ok(backup.len())
    }

    /// Archive the current history under `name` (or the session id when no
    /// name is given). The live history is left untouched.
    ///
    /// Returns the archive name used.
    pub fn save(&self, name: Option<&str>) -> Result<String, HistoryError> {
        let name = match name {
            Some(n) => n.to_string(),
            None => self.session_id(),
        };

        let archive = ArchivedSession {
            document: self.store.load()?,
            session_name: name.clone(),
            session_duration: self.duration(),
            saved_at: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        };
        self.store.save_archive(&archive)?;
        info!("Session archived as {}", name);
        Ok(name)
    }

    /// The most recent transcript entry, if any.
    pub fn last_entry(&self) -> Result<Option<TranscriptEntry>, HistoryError> {
        Ok(self.store.load()?.last().cloned())
    }

    /// The last `count` user prompts, oldest first, each truncated for
    /// display. Empty when the history cannot be read.
    pub fn recent_topics(&self, count: usize) -> Vec<String> {
        let doc = self.store.load().unwrap_or_default();
        doc.sessions
            .iter()
            .rev()
            .take(count)
            .rev()
            .map(|entry| {
                let prompt = &entry.user_prompt;
                let head = truncate_str(prompt, TOPIC_CHARS);
                if head.len() < prompt.len() {
                    format!("{}...", head)
                } else {
                    head.to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use std::collections::BTreeMap;
    use tribunal_domain::Provider;

    fn entry(prompt: &str) -> TranscriptEntry {
        TranscriptEntry::single(
            "2026-08-30T10:00:00".to_string(),
            prompt,
            Provider::Claude,
            "reply".to_string(),
        )
    }

    fn seeded_store(prompts: &[&str]) -> Arc<MemoryStore> {
        let doc = HistoryDocument {
            sessions: prompts.iter().map(|p| entry(p)).collect(),
        };
        Arc::new(MemoryStore::with_document(doc))
    }

    #[test]
    fn test_clear_then_undo_round_trips() {
        let store = seeded_store(&["one", "two"]);
        let before = store.document();
        let mut manager = SessionManager::new(store.clone());

        manager.clear().unwrap();
        assert!(store.document().is_empty());
        assert!(manager.has_backup());

        let restored = manager.undo().unwrap();
        assert_eq!(restored, 2);
        assert_eq!(store.document(), before);
    }

    #[test]
    fn test_second_undo_has_nothing_to_restore() {
        let store = seeded_store(&["one"]);
        let mut manager = SessionManager::new(store.clone());

        manager.clear().unwrap();
        manager.undo().unwrap();

        let err = manager.undo().unwrap_err();
        assert!(matches!(err, UndoError::NothingToRestore));
        // The restored history is unaffected by the failed undo
        assert_eq!(store.document().len(), 1);
    }

    #[test]
    fn test_clear_overwrites_previous_backup() {
        let store = seeded_store(&["one"]);
        let mut manager = SessionManager::new(store.clone());

        manager.clear().unwrap();
        store.replace(&seeded_store(&["two", "three"]).document()).unwrap();
        manager.clear().unwrap();

        // Undo restores the second cleared state, not the first
        let restored = manager.undo().unwrap();
        assert_eq!(restored, 2);
        assert_eq!(store.document().sessions[0].user_prompt, "two");
    }

    #[test]
    fn test_save_archives_without_touching_live_history() {
        let store = seeded_store(&["one", "two"]);
        let manager = SessionManager::new(store.clone());

        let name = manager.save(Some("my_session")).unwrap();
        assert_eq!(name, "my_session");

        let archives = store.archives();
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].session_name, "my_session");
        assert_eq!(archives[0].document, store.document());
        assert!(!archives[0].saved_at.is_empty());
        assert!(!archives[0].session_duration.is_empty());
        // Live history unchanged
        assert_eq!(store.document().len(), 2);
    }

    #[test]
    fn test_save_defaults_to_session_id() {
        let store = seeded_store(&[]);
        let manager = SessionManager::new(store);

        let name = manager.save(None).unwrap();
        assert_eq!(name, manager.session_id());
    }

    #[test]
    fn test_recent_topics_truncated_and_chronological() {
        let long = "x".repeat(80);
        let store = seeded_store(&["first", "second", "third", &long]);
        let manager = SessionManager::new(store);

        let topics = manager.recent_topics(3);
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0], "second");
        assert_eq!(topics[1], "third");
        assert_eq!(topics[2], format!("{}...", "x".repeat(60)));
    }

    #[test]
    fn test_last_entry() {
        let store = seeded_store(&["first", "latest"]);
        let manager = SessionManager::new(store);

        let last = manager.last_entry().unwrap().unwrap();
        assert_eq!(last.user_prompt, "latest");
    }
}
