//! Domain layer for tribunal
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tribunal
//!
//! Every fan-out exchange asks the three fixed providers the same question,
//! then puts the answers before a judge - a distinguished provider
//! configuration that picks the single best outcome.
//!
//! ## Transcript
//!
//! Each exchange is persisted as an immutable [`TranscriptEntry`] in an
//! ordered [`HistoryDocument`]. A character-windowed flattening of the
//! document ([`render_condensed`]) serves as model context.

pub mod core;
pub mod judge;
pub mod prompt;
pub mod session;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, provider::Provider};
pub use judge::{
    parsing::{JudgeOutcome, RawVerdict, decode_judge_response, parse_judge_response, resolve_verdict},
    verdict::Verdict,
};
pub use prompt::template::PromptTemplate;
pub use session::context::SessionContext;
pub use transcript::{
    condense::render_condensed,
    document::{ArchivedSession, HistoryDocument},
    entry::{JudgeRecord, Mode, TranscriptEntry},
};
pub use util::{tail_chars, truncate_str};
