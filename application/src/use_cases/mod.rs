//! Use cases - orchestration of ports and domain logic

pub mod judge;
pub mod run_all;
pub mod run_single;
pub mod session;

use chrono::Local;

/// Character budget for the condensed-history context window.
pub const HISTORY_WINDOW_CHARS: usize = 1000;

/// ISO-8601 local timestamp at second precision, as stored in entries.
pub(crate) fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
