//! OpenAI chat completions adapter.

use super::{classify_http_error, transport_error};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tribunal_application::ports::provider_gateway::GatewayError;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub(crate) async fn ask(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, GatewayError> {
    debug!("OpenAI request: model={}", model);

    let request = CompletionsRequest {
        model,
        messages: [ChatMessage {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(COMPLETIONS_URL)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(classify_http_error(status, &body));
    }

    let parsed: CompletionsResponse = serde_json::from_str(&body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .find(|text| !text.is_empty())
        .ok_or_else(|| GatewayError::MalformedResponse("no completion choice".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = CompletionsRequest {
            model: "gpt-4o",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_response_first_choice_content() {
        let body = r#"{
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "the reply"}}
            ]
        }"#;
        let parsed: CompletionsResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .filter_map(|c| c.message.content)
            .find(|t| !t.is_empty());
        assert_eq!(text.as_deref(), Some("the reply"));
    }

    #[test]
    fn test_null_content_tolerated() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let parsed: CompletionsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
