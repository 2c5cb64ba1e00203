//! Session context - start time and the single-slot clear backup.

use crate::transcript::document::HistoryDocument;
use chrono::{DateTime, Local};

/// Session-scoped state carried by the session manager.
///
/// The backup slot holds at most one document snapshot: set by `clear`,
/// fully consumed by a successful `undo`. It lives in process memory only
/// and is never persisted - single-level undo, not a stack.
#[derive(Debug, Clone)]
pub struct SessionContext {
    started_at: DateTime<Local>,
    backup: Option<HistoryDocument>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            backup: None,
        }
    }

    /// Session identifier derived from the start time, e.g. `20260830_141502`.
    ///
    /// Used as the default archive name when a save gives no name.
    pub fn session_id(&self) -> String {
        self.started_at.format("%Y%m%d_%H%M%S").to_string()
    }

    /// Elapsed time since session start, formatted `2h 5m` or `12m`.
    pub fn duration(&self) -> String {
        Self::format_duration(Local::now() - self.started_at)
    }

    fn format_duration(elapsed: chrono::Duration) -> String {
        let total_minutes = elapsed.num_minutes().max(0);
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    /// Stash a snapshot in the backup slot, replacing any previous one.
    pub fn stash_backup(&mut self, doc: HistoryDocument) {
        self.backup = Some(doc);
    }

    /// Consume the backup slot. Empty after this call regardless of what the
    /// caller does with the snapshot.
    pub fn take_backup(&mut self) -> Option<HistoryDocument> {
        self.backup.take()
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_slot_is_single_level() {
        let mut ctx = SessionContext::new();
        assert!(!ctx.has_backup());

        ctx.stash_backup(HistoryDocument::default());
        assert!(ctx.has_backup());

        assert!(ctx.take_backup().is_some());
        assert!(!ctx.has_backup());
        // Second take finds the slot empty
        assert!(ctx.take_backup().is_none());
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(
            SessionContext::format_duration(chrono::Duration::minutes(12)),
            "12m"
        );
        assert_eq!(
            SessionContext::format_duration(chrono::Duration::minutes(125)),
            "2h 5m"
        );
        assert_eq!(
            SessionContext::format_duration(chrono::Duration::seconds(30)),
            "0m"
        );
        // Clock skew must not produce negative durations
        assert_eq!(
            SessionContext::format_duration(chrono::Duration::minutes(-5)),
            "0m"
        );
    }

    #[test]
    fn test_session_id_shape() {
        let ctx = SessionContext::new();
        let id = ctx.session_id();
        assert_eq!(id.len(), 15);
        assert_eq!(id.chars().nth(8), Some('_'));
    }
}
