//! Google Gemini generateContent adapter.
//!
//! The only adapter that reshapes the prompt: a brevity preamble is
//! prepended, since this vendor's default verbosity drowns the judged
//! comparison.

use super::{classify_http_error, transport_error};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tribunal_application::ports::provider_gateway::GatewayError;
use tribunal_domain::PromptTemplate;

const GENERATE_URL_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

pub(crate) async fn ask(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, GatewayError> {
    debug!("Gemini request: model={}", model);

    let framed = format!("{}\n\n{}", PromptTemplate::gemini_brevity_preamble(), prompt);
    let request = GenerateRequest {
        contents: [Content {
            parts: [Part { text: &framed }],
        }],
    };

    let url = format!("{}/{}:generateContent", GENERATE_URL_BASE, model);
    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(classify_http_error(status, &body));
    }

    let parsed: GenerateResponse = serde_json::from_str(&body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    parsed
        .candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .map(|p| p.text)
        .find(|text| !text.is_empty())
        .ok_or_else(|| GatewayError::MalformedResponse("no candidate text".to_string()))
}
