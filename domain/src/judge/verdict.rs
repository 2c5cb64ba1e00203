//! Verdict value object - the judge's structured output.

use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};

/// The judge's decision: chosen provider, chosen text, rationale.
///
/// Derived from free-form judge model output (see [`crate::judge::parsing`]);
/// never stored on its own, only embedded in a transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub best_agent: Provider,
    pub best_text: String,
    pub rationale: String,
}
