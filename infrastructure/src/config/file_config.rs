//! File-backed configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tribunal_domain::Provider;

/// Top-level configuration, merged from defaults, config files, and
/// model-id environment overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Model identifiers, one per provider plus the judge.
///
/// The judge runs on a distinguished (stronger) Claude model so verdict
/// quality does not track the candidate model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub claude: String,
    pub claude_judge: String,
    pub gemini: String,
    pub openai: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            claude: "claude-sonnet-4-5-20250929".to_string(),
            claude_judge: "claude-opus-4-5-20251101".to_string(),
            gemini: "gemini-1.5-flash".to_string(),
            openai: "gpt-4o".to_string(),
        }
    }
}

impl ModelsConfig {
    pub fn model_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::Claude => &self.claude,
            Provider::Gemini => &self.gemini,
            Provider::OpenAi => &self.openai,
        }
    }

    /// Apply `*_MODEL_ID` environment overrides on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|var| std::env::var(var).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("CLAUDE_MODEL_ID") {
            self.claude = v;
        }
        if let Some(v) = lookup("CLAUDE_JUDGE_MODEL_ID") {
            self.claude_judge = v;
        }
        if let Some(v) = lookup("GEMINI_MODEL_ID") {
            self.gemini = v;
        }
        if let Some(v) = lookup("OPENAI_MODEL_ID") {
            self.openai = v;
        }
    }
}

/// Where the transcript log and session archives live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub log_path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("tribunal_chatlog.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.models.model_for(Provider::Gemini), "gemini-1.5-flash");
        assert_ne!(config.models.claude, config.models.claude_judge);
        assert_eq!(
            config.history.log_path,
            PathBuf::from("tribunal_chatlog.json")
        );
    }

    #[test]
    fn test_env_overrides_beat_file_values() {
        let mut models = ModelsConfig::default();
        models.apply_overrides(|var| {
            (var == "GEMINI_MODEL_ID").then(|| "gemini-2.0-pro".to_string())
        });
        assert_eq!(models.gemini, "gemini-2.0-pro");
        // Untouched overrides leave the file values alone
        assert_eq!(models.openai, "gpt-4o");
    }

    #[test]
    fn test_partial_toml_fills_from_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [models]
            claude = "claude-x"
            claude_judge = "claude-x-judge"
            gemini = "gemini-x"
            openai = "gpt-x"
            "#,
        )
        .unwrap();
        assert_eq!(config.models.claude, "claude-x");
        // Missing [history] section falls back wholesale
        assert_eq!(
            config.history.log_path,
            PathBuf::from("tribunal_chatlog.json")
        );
    }
}
