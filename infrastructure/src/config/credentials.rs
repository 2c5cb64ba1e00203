//! API key resolution from the process environment.

use thiserror::Error;
use tribunal_domain::Provider;

const CLAUDE_API_KEY: &str = "CLAUDE_API_KEY";
const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum CredentialsError {
    /// The only fatal startup condition: one or more keys absent.
    #[error("missing API keys: {0}. Set them in the environment before starting.")]
    Missing(String),
}

/// The three vendor API keys. All must be present at startup; there is no
/// partial-credential mode.
#[derive(Debug, Clone)]
pub struct Credentials {
    claude: String,
    gemini: String,
    openai: String,
}

impl Credentials {
    /// Read all three keys from the environment.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the keys through an arbitrary lookup. Lets tests avoid touching
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialsError> {
        let mut missing = Vec::new();
        let mut get = |var: &'static str| match lookup(var) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(var);
                String::new()
            }
        };

        let claude = get(CLAUDE_API_KEY);
        let gemini = get(GEMINI_API_KEY);
        let openai = get(OPENAI_API_KEY);

        if missing.is_empty() {
            Ok(Self {
                claude,
                gemini,
                openai,
            })
        } else {
            Err(CredentialsError::Missing(missing.join(", ")))
        }
    }

    pub fn key_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::Claude => &self.claude,
            Provider::Gemini => &self.gemini,
            Provider::OpenAi => &self.openai,
        }
    }
}
