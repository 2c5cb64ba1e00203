//! Anthropic Messages API adapter.

use super::{classify_http_error, transport_error};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tribunal_application::ports::provider_gateway::GatewayError;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub(crate) async fn ask(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, GatewayError> {
    debug!("Anthropic request: model={}", model);

    let request = MessagesRequest {
        model,
        max_tokens: MAX_TOKENS,
        messages: [Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(MESSAGES_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .json(&request)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(classify_http_error(status, &body));
    }

    let parsed: MessagesResponse = serde_json::from_str(&body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    parsed
        .content
        .into_iter()
        .map(|block| block.text)
        .find(|text| !text.is_empty())
        .ok_or_else(|| GatewayError::MalformedResponse("no text content block".to_string()))
}
