//! Console output formatting for chat exchanges.

use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;
use tribunal_domain::{JudgeRecord, Provider, TranscriptEntry};

/// Formats chat exchanges for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Provider name in its fixed display color.
    pub fn provider_name(provider: Provider) -> ColoredString {
        match provider {
            Provider::Claude => provider.as_str().truecolor(255, 140, 0),
            Provider::Gemini => provider.as_str().truecolor(142, 68, 173),
            Provider::OpenAi => provider.as_str().truecolor(52, 152, 219),
        }
    }

    /// One provider's reply, headed by its colored name.
    pub fn format_reply(provider: Provider, text: &str) -> String {
        format!("{}\n{}\n", Self::provider_name(provider).bold(), text)
    }

    /// All three replies in fixed provider order.
    pub fn format_answers(answers: &BTreeMap<Provider, String>) -> String {
        let mut output = String::new();
        for provider in Provider::all() {
            if let Some(text) = answers.get(&provider) {
                output.push('\n');
                output.push_str(&Self::format_reply(provider, text));
            }
        }
        output
    }

    /// The judge's verdict block.
    pub fn format_judge(judge: &JudgeRecord) -> String {
        format!(
            "\n{} {}\n{}\n\n{}\n",
            "Judge verdict:".green().bold(),
            format!("[{}]", judge.best_agent).green().bold(),
            judge.rationale.dimmed(),
            judge.best_text
        )
    }

    /// One past exchange, pretty-printed as stored.
    pub fn format_entry(entry: &TranscriptEntry) -> String {
        serde_json::to_string_pretty(entry).unwrap_or_else(|_| "{}".to_string())
    }

    /// Session banner with the id and the last few topics.
    pub fn banner(session_id: &str, recent_topics: &[String]) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│            Tribunal - Chat Mode             │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Session:".cyan().bold(), session_id));
        if !recent_topics.is_empty() {
            output.push_str(&format!("{}\n", "Recent topics:".cyan().bold()));
            for topic in recent_topics {
                output.push_str(&format!("  - {}\n", topic));
            }
        }
        output.push_str("\nType your question, or `menu` for commands.\n");
        output
    }

    /// The command menu.
    pub fn menu() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("Commands:\n");
        output.push_str("  <text>            - Ask all three providers, judge picks the best\n");
        output.push_str("  claude: <text>    - Ask Claude only\n");
        output.push_str("  gemini: <text>    - Ask Gemini only\n");
        output.push_str("  openai: <text>    - Ask OpenAI only\n");
        output.push_str("  last              - Show the most recent exchange\n");
        output.push_str("  save[: <name>]    - Archive this session\n");
        output.push_str("  clear             - Clear history (undo restores it)\n");
        output.push_str("  undo              - Restore the last cleared history\n");
        output.push_str("  menu              - Show this menu\n");
        output.push_str("  exit              - Leave\n");
        output.push('\n');
        output.push_str("Or pick by number:\n");
        output.push_str("  1 Claude  2 Gemini  3 OpenAI  4 all three\n");
        output.push_str("  5 last  6 clear  7 undo  8 exit\n");
        output
    }

    pub fn success(message: &str) -> String {
        format!("{} {}", "✓".green().bold(), message)
    }

    pub fn failure(message: &str) -> String {
        format!("{} {}", "✗".red().bold(), message)
    }
}
