//! Provider value object representing one external text-generation service

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The three providers that take part in every session (Value Object).
///
/// The set is fixed: every all-then-judge exchange produces exactly one
/// answer per provider, and the judge verdict always names one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    Claude,
    Gemini,
    OpenAi,
}

impl Provider {
    /// Display name used in transcripts, prompts, and the command surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Claude => "Claude",
            Provider::Gemini => "Gemini",
            Provider::OpenAi => "OpenAI",
        }
    }

    /// All providers, in the fixed call order used by the fan-out path.
    pub fn all() -> [Provider; 3] {
        [Provider::Claude, Provider::Gemini, Provider::OpenAi]
    }

    /// The provider a judge verdict falls back to when the judge response
    /// cannot be parsed or names an unknown agent.
    pub fn fallback() -> Provider {
        Provider::Claude
    }

    /// Exact display-name match, case-sensitive.
    ///
    /// Used for the judge `best_agent` membership check, which must accept
    /// only the canonical names. The command surface uses the
    /// case-insensitive [`FromStr`] impl instead.
    pub fn from_exact(s: &str) -> Option<Provider> {
        match s {
            "Claude" => Some(Provider::Claude),
            "Gemini" => Some(Provider::Gemini),
            "OpenAI" => Some(Provider::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = DomainError;

    /// Case-insensitive parse, for leading-token command dispatch.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Provider::Claude),
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

impl Serialize for Provider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
