//! Prompt templates for provider and judge calls

use crate::core::provider::Provider;
use std::collections::BTreeMap;

/// Templates for the prompts sent at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Comparison prompt for the judge model.
    ///
    /// Embeds the condensed history and all three candidate answers, and asks
    /// for a strict JSON verdict (which the parser then treats as
    /// best-effort anyway).
    pub fn judge_comparison(history: &str, answers: &BTreeMap<Provider, String>) -> String {
        let mut prompt = String::from(
            "You are the lead judge. Compare the following three answers and select the single best outcome. \
             Prioritize factual accuracy, clarity, completeness, and actionable detail. Explain your choice briefly.\n\n",
        );

        prompt.push_str(&format!("Prior conversation context:\n{}\n\n", history));

        prompt.push_str("Answers to compare:\n");
        for provider in Provider::all() {
            let answer = answers.get(&provider).map(String::as_str).unwrap_or("");
            prompt.push_str(&format!("- {}: {}\n", provider, answer));
        }

        prompt.push_str(
            "\nReturn your response in this strict JSON format:\n\
             { \"best_agent\": \"Claude|Gemini|OpenAI\", \"best_text\": \"...\", \"rationale\": \"...\" }",
        );

        prompt
    }

    /// Prompt for the single-agent path: condensed history ahead of the
    /// user's prompt.
    ///
    /// Only this path injects history. The fan-out path sends the raw prompt
    /// to keep three sequential round trips fast.
    pub fn single_with_history(history: &str, user_prompt: &str) -> String {
        format!("{}\n\nUser prompt:\n{}", history, user_prompt)
    }

    /// Brevity instruction prepended to every Gemini request, which otherwise
    /// tends to answer at several times the length of the other providers.
    pub fn gemini_brevity_preamble() -> &'static str {
        "CRITICAL: Respond in 2-4 concise paragraphs maximum. No bullet lists unless absolutely necessary. \
         Be as brief and direct as Claude or ChatGPT. Get to the core answer immediately."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_prompt_lists_all_answers() {
        let mut answers = BTreeMap::new();
        answers.insert(Provider::Claude, "a".to_string());
        answers.insert(Provider::OpenAi, "c".to_string());

        let prompt = PromptTemplate::judge_comparison("earlier context", &answers);
        assert!(prompt.contains("Prior conversation context:\nearlier context"));
        assert!(prompt.contains("- Claude: a"));
        // Missing answers still get a labeled (empty) slot
        assert!(prompt.contains("- Gemini: "));
        assert!(prompt.contains("- OpenAI: c"));
        assert!(prompt.contains("strict JSON format"));
    }

    #[test]
    fn test_single_prompt_puts_history_first() {
        let prompt = PromptTemplate::single_with_history("old chat", "new question");
        assert!(prompt.starts_with("old chat"));
        assert!(prompt.ends_with("User prompt:\nnew question"));
    }
}
