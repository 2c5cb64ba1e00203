//! Provider gateway port
//!
//! Defines the interface for communicating with the three text-generation
//! providers. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;
use tribunal_domain::Provider;

/// Errors surfaced by provider transports.
///
/// These never reach the interactive surface as errors - the
/// [`ProviderPool`](crate::providers::ProviderPool) downgrades them to
/// in-band text.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit or quota exceeded: {0}")]
    Quota(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Whether this is a quota-class error that should trip the one-way
    /// per-provider degradation flag.
    ///
    /// Besides the typed variant, the message is inspected for the known
    /// markers, since some providers report quota exhaustion through generic
    /// error bodies.
    pub fn is_quota(&self) -> bool {
        if matches!(self, GatewayError::Quota(_)) {
            return true;
        }
        let message = self.to_string().to_lowercase();
        message.contains("429") || message.contains("quota") || message.contains("rate limit")
    }
}

/// Gateway for provider communication.
///
/// One round trip per call; no sessions, no streaming. Timeouts are whatever
/// the transport defaults to - no deadline is enforced here.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Send `prompt` to `provider` and return the raw response text.
    async fn ask(&self, provider: Provider, prompt: &str) -> Result<String, GatewayError>;

    /// Send `prompt` to the judge - the distinguished (stronger) provider
    /// configuration used only for verdicts.
    async fn ask_judge(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Label identifying the judge configuration, e.g.
    /// `Claude (claude-opus-4-5-20251101)`. Recorded in transcript entries.
    fn judge_label(&self) -> String;
}
