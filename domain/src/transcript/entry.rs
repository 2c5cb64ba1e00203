//! Transcript entities - immutable records of user interactions.
//!
//! A [`TranscriptEntry`] is written once by the orchestration layer after all
//! provider calls (and, for the fan-out path, the judge call) complete. It is
//! never mutated afterwards; entries disappear only through a full session
//! clear.

use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a transcript entry was produced.
///
/// The serialized names are part of the persisted file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// One provider, history-augmented prompt.
    #[serde(rename = "single")]
    Single,
    /// All three providers followed by a judge verdict.
    #[serde(rename = "all_three_then_judge")]
    AllThenJudge,
}

/// Judge verdict as persisted inside a transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeRecord {
    /// Label identifying who judged, e.g. `Claude (claude-opus-4-5-20251101)`.
    pub judge_agent: String,
    /// The chosen provider. Always one of the three fixed names.
    pub best_agent: Provider,
    /// The chosen answer text.
    pub best_text: String,
    /// The judge's explanation, or a fallback diagnostic.
    pub rationale: String,
}

/// One persisted record of a single user interaction and its outcome(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// ISO-8601 local timestamp, second precision.
    pub timestamp: String,
    pub user_prompt: String,
    pub mode: Mode,
    /// The provider addressed, present only for [`Mode::Single`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<Provider>,
    /// Provider name -> response text. Exactly one key in single mode,
    /// exactly three in all-then-judge mode (failed calls hold error text,
    /// never an absent key).
    pub responses: BTreeMap<Provider, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge: Option<JudgeRecord>,
}

impl TranscriptEntry {
    /// Entry for the single-agent path.
    pub fn single(
        timestamp: impl Into<String>,
        user_prompt: impl Into<String>,
        agent: Provider,
        reply: impl Into<String>,
    ) -> Self {
        let mut responses = BTreeMap::new();
        responses.insert(agent, reply.into());
        Self {
            timestamp: timestamp.into(),
            user_prompt: user_prompt.into(),
            mode: Mode::Single,
            agent: Some(agent),
            responses,
            judge: None,
        }
    }

    /// Entry for the all-then-judge path.
    pub fn all_then_judge(
        timestamp: impl Into<String>,
        user_prompt: impl Into<String>,
        responses: BTreeMap<Provider, String>,
        judge: JudgeRecord,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            user_prompt: user_prompt.into(),
            mode: Mode::AllThenJudge,
            agent: None,
            responses,
            judge: Some(judge),
        }
    }
}
