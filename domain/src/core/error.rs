//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown provider: '{0}'. Use Claude, Gemini, or OpenAI")]
    UnknownProvider(String),
}
