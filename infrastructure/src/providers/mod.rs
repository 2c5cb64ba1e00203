//! HTTP adapters for the three provider APIs.
//!
//! One module per vendor wire format; [`HttpProviderGateway`] dispatches on
//! the provider and implements the application-layer gateway port. The judge
//! goes through the Anthropic adapter with its own model id.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use crate::config::{Credentials, ModelsConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tribunal_application::ports::provider_gateway::{GatewayError, ProviderGateway};
use tribunal_domain::{Provider, truncate_str};

/// How much of an HTTP error body makes it into the error message.
const ERROR_BODY_BYTES: usize = 200;

/// Map a non-success HTTP response to a gateway error.
///
/// 429 and body markers become quota-class (tripping degradation upstream),
/// 401/403 become auth, everything else is transport.
pub(crate) fn classify_http_error(status: StatusCode, body: &str) -> GatewayError {
    let excerpt = format!("HTTP {}: {}", status.as_u16(), truncate_str(body, ERROR_BODY_BYTES));
    let lower = body.to_lowercase();
    if status == StatusCode::TOO_MANY_REQUESTS
        || lower.contains("quota")
        || lower.contains("rate limit")
    {
        GatewayError::Quota(excerpt)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        GatewayError::Auth(excerpt)
    } else {
        GatewayError::Transport(excerpt)
    }
}

pub(crate) fn transport_error(e: reqwest::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

/// The real gateway: one HTTPS round trip per ask, no streaming.
pub struct HttpProviderGateway {
    client: reqwest::Client,
    credentials: Credentials,
    models: ModelsConfig,
}

impl HttpProviderGateway {
    pub fn new(credentials: Credentials, models: ModelsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            models,
        }
    }
}

#[async_trait]
impl ProviderGateway for HttpProviderGateway {
    async fn ask(&self, provider: Provider, prompt: &str) -> Result<String, GatewayError> {
        let key = self.credentials.key_for(provider);
        let model = self.models.model_for(provider);
        match provider {
            Provider::Claude => anthropic::ask(&self.client, key, model, prompt).await,
            Provider::Gemini => gemini::ask(&self.client, key, model, prompt).await,
            Provider::OpenAi => openai::ask(&self.client, key, model, prompt).await,
        }
    }

    async fn ask_judge(&self, prompt: &str) -> Result<String, GatewayError> {
        let key = self.credentials.key_for(Provider::Claude);
        anthropic::ask(&self.client, key, &self.models.claude_judge, prompt).await
    }

    fn judge_label(&self) -> String {
        format!("{} ({})", Provider::Claude, self.models.claude_judge)
    }
}
