//! Condensed history rendering.
//!
//! Flattens the history document into a plain-text transcript and keeps only
//! the trailing character window. This is a simple sliding context window for
//! model prompts - character-based, not token-aware.

use super::document::HistoryDocument;
use crate::core::provider::Provider;
use crate::util::tail_chars;

/// Render all entries chronologically and return the trailing `max_chars`
/// characters.
///
/// Each entry contributes the user prompt, each provider's labeled answer,
/// and (when present) the judge verdict line plus the chosen text.
pub fn render_condensed(doc: &HistoryDocument, max_chars: usize) -> String {
    let mut chunks = Vec::new();

    for entry in &doc.sessions {
        chunks.push(format!("[{}] User: {}", entry.timestamp, entry.user_prompt));
        for provider in Provider::all() {
            if let Some(text) = entry.responses.get(&provider) {
                chunks.push(format!("{}: {}", provider, text));
            }
        }
        if let Some(judge) = &entry.judge {
            chunks.push(format!("Judge: {} -> {}", judge.judge_agent, judge.best_agent));
            chunks.push(format!("Best Outcome: {}", judge.best_text));
        }
    }

    let text = chunks.join("\n");
    tail_chars(&text, max_chars).to_string()
}
