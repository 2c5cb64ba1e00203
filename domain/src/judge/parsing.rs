//! Judge response parsing.
//!
//! Extracts a structured [`Verdict`] from free-form judge model output. This
//! is a best-effort natural-language-to-JSON bridge: the judge is asked for a
//! strict JSON object but may wrap it in prose, emit malformed JSON, or return
//! no JSON at all. Every outcome maps deterministically to a usable verdict -
//! parsing never fails upward.
//!
//! Pure domain logic: no I/O, no provider calls.
//!
//! # Policy
//!
//! 1. Slice between the first `{` and the last `}` and attempt a strict
//!    decode of that substring.
//! 2. A decoded `best_agent` that is missing or not an exact provider name is
//!    forced to the fixed fallback provider.
//! 3. A missing `best_text` is substituted with the chosen provider's
//!    original answer; a missing `rationale` gets a placeholder.
//! 4. No braces, or a failed decode, yields a fallback verdict whose
//!    rationale carries a distinguishing prefix plus a truncated excerpt of
//!    the raw text for diagnosability.

use super::verdict::Verdict;
use crate::core::provider::Provider;
use crate::util::truncate_str;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Rationale substituted when the decoded object omits one.
const NO_RATIONALE: &str = "No rationale provided";

/// Byte budget for the raw-text excerpt embedded in fallback rationales.
const RAW_EXCERPT_BYTES: usize = 100;

/// Loosely-typed verdict as decoded from the judge response.
///
/// All fields are optional; presence/membership checks happen in
/// [`resolve_verdict`]. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RawVerdict {
    #[serde(default)]
    pub best_agent: Option<String>,
    #[serde(default)]
    pub best_text: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
}

/// Decode outcome for a judge response, before fallback mapping.
#[derive(Debug)]
pub enum JudgeOutcome {
    /// A brace-delimited substring was found and decoded.
    Decoded(RawVerdict),
    /// The response contained no `{`/`}` pair.
    NoBraces,
    /// A candidate substring was found but failed to decode.
    DecodeError(serde_json::Error),
}

/// Classify a raw judge response into a [`JudgeOutcome`].
pub fn decode_judge_response(raw: &str) -> JudgeOutcome {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return JudgeOutcome::NoBraces;
    };
    // A `}` before the first `{` leaves no candidate object; treat it as a
    // decode failure of the empty candidate so the diagnostic class matches.
    let candidate = if end > start { &raw[start..=end] } else { "" };
    match serde_json::from_str::<RawVerdict>(candidate) {
        Ok(decoded) => JudgeOutcome::Decoded(decoded),
        Err(e) => JudgeOutcome::DecodeError(e),
    }
}

/// Map a decode outcome to a final [`Verdict`].
///
/// `answers` supplies the original candidate answers so fallback verdicts can
/// carry real text instead of an empty string.
pub fn resolve_verdict(
    outcome: JudgeOutcome,
    raw: &str,
    answers: &BTreeMap<Provider, String>,
) -> Verdict {
    let answer_for = |provider: Provider| answers.get(&provider).cloned().unwrap_or_default();

    match outcome {
        JudgeOutcome::Decoded(decoded) => {
            let best_agent = decoded
                .best_agent
                .as_deref()
                .and_then(Provider::from_exact)
                .unwrap_or_else(Provider::fallback);
            let best_text = decoded
                .best_text
                .unwrap_or_else(|| answer_for(best_agent));
            let rationale = decoded
                .rationale
                .unwrap_or_else(|| NO_RATIONALE.to_string());
            Verdict {
                best_agent,
                best_text,
                rationale,
            }
        }
        JudgeOutcome::NoBraces => Verdict {
            best_agent: Provider::fallback(),
            best_text: answer_for(Provider::fallback()),
            rationale: format!(
                "Fallback: No JSON in response. Raw: {}...",
                truncate_str(raw, RAW_EXCERPT_BYTES)
            ),
        },
        JudgeOutcome::DecodeError(e) => Verdict {
            best_agent: Provider::fallback(),
            best_text: answer_for(Provider::fallback()),
            rationale: format!(
                "Fallback: JSON error: {}. Raw: {}...",
                e,
                truncate_str(raw, RAW_EXCERPT_BYTES)
            ),
        },
    }
}

/// Decode and resolve in one step.
pub fn parse_judge_response(raw: &str, answers: &BTreeMap<Provider, String>) -> Verdict {
    resolve_verdict(decode_judge_response(raw), raw, answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_answers() -> BTreeMap<Provider, String> {
        let mut answers = BTreeMap::new();
        answers.insert(Provider::Claude, "ans1".to_string());
        answers.insert(Provider::Gemini, "ans2".to_string());
        answers.insert(Provider::OpenAi, "ans3".to_string());
        answers
    }

    // ==================== Happy path ====================

    #[test]
    fn test_parses_json_embedded_in_prose() {
        let raw = r#"Here is my pick: {"best_agent":"Gemini","best_text":"ans2","rationale":"more complete"}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Gemini);
        assert_eq!(verdict.best_text, "ans2");
        assert_eq!(verdict.rationale, "more complete");
    }

    #[test]
    fn test_parses_json_in_markdown_fence() {
        let raw = "My verdict:\n```json\n{\"best_agent\": \"OpenAI\", \"best_text\": \"ans3\", \"rationale\": \"clearest\"}\n```\n";
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::OpenAi);
        assert_eq!(verdict.best_text, "ans3");
    }

    // ==================== Presence / membership checks ====================

    #[test]
    fn test_unknown_agent_forced_to_fallback() {
        let raw = r#"{"best_agent":"Mistral","best_text":"x","rationale":"y"}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Claude);
        // Explicit best_text survives even when the agent is forced
        assert_eq!(verdict.best_text, "x");
    }

    #[test]
    fn test_lowercase_agent_is_not_a_member() {
        // Membership is exact-name, unlike the command surface
        let raw = r#"{"best_agent":"gemini"}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Claude);
    }

    #[test]
    fn test_missing_best_text_substitutes_original_answer() {
        let raw = r#"{"best_agent":"Gemini","rationale":"short but right"}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Gemini);
        assert_eq!(verdict.best_text, "ans2");
    }

    #[test]
    fn test_missing_rationale_gets_placeholder() {
        let raw = r#"{"best_agent":"OpenAI","best_text":"ans3"}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.rationale, "No rationale provided");
    }

    // ==================== Fallbacks ====================

    #[test]
    fn test_no_braces_falls_back_with_marker() {
        let raw = "I cannot decide.";
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Claude);
        assert_eq!(verdict.best_text, "ans1");
        assert!(verdict.rationale.contains("No JSON in response"));
        assert!(verdict.rationale.contains("I cannot decide."));
    }

    #[test]
    fn test_malformed_json_falls_back_with_error_marker() {
        let raw = r#"{"best_agent": "Gemini", "best_text": unquoted}"#;
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Claude);
        assert_eq!(verdict.best_text, "ans1");
        assert!(verdict.rationale.contains("JSON error"));
    }

    #[test]
    fn test_brace_before_open_is_decode_error() {
        let raw = "} nothing useful {";
        let verdict = parse_judge_response(raw, &sample_answers());
        assert_eq!(verdict.best_agent, Provider::Claude);
        assert!(verdict.rationale.contains("JSON error"));
    }

    #[test]
    fn test_fallback_excerpt_is_truncated() {
        let raw = "x".repeat(500);
        let verdict = parse_judge_response(&raw, &sample_answers());
        // prefix + 100-byte excerpt + ellipsis; well under the raw length
        assert!(verdict.rationale.len() < 200);
        assert!(verdict.rationale.ends_with("..."));
    }

    #[test]
    fn test_best_agent_is_always_a_known_provider() {
        let inputs = [
            "",
            "no json",
            "{}",
            "{broken",
            r#"{"best_agent": 42}"#,
            r#"{"best_agent": "Claude "}"#,
        ];
        for raw in inputs {
            let verdict = parse_judge_response(raw, &sample_answers());
            assert!(
                Provider::all().contains(&verdict.best_agent),
                "unexpected agent for input {:?}",
                raw
            );
        }
    }
}
