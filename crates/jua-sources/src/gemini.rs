//! Gemini record source.
//!
//! One request, one response: the model is asked to enumerate companies as a
//! JSON array matching the [`Company`] shape. There is no retry or backoff;
//! a failed call is a failed run.

use jua_model::Company;
use serde::{Deserialize, Serialize};

use crate::SourceError;

/// Configuration for the Gemini source.
///
/// The API key is an explicit value filled in by the caller (the CLI reads
/// `GEMINI_API_KEY`); nothing in this crate touches the environment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// What to ask for, e.g. "solar energy companies in Tanzania".
    pub topic: String,
    /// How many companies to request.
    pub count: usize,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
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

fn build_prompt(config: &GeminiConfig) -> String {
    format!(
        "List {} {}. Respond with only a JSON array of objects with the keys \
         \"name\", \"location\", \"services\", \"description\", \"phone\" and \
         \"website\". Omit \"phone\" and \"website\" when unknown. No prose, \
         no markdown.",
        config.count, config.topic
    )
}

/// Fetch a company list from the Gemini API.
pub async fn fetch(config: &GeminiConfig) -> Result<Vec<Company>, SourceError> {
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        config.model, config.api_key
    );

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(config),
            }],
        }],
    };

    tracing::info!("Requesting {} companies from {}", config.count, config.model);

    let client = reqwest::Client::new();
    let response: GenerateResponse = client
        .post(&url)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| SourceError::EmptyResponse("no candidates in response".to_string()))?;

    parse_companies(&text)
}

/// Parse the model's reply into records, tolerating markdown code fences.
fn parse_companies(text: &str) -> Result<Vec<Company>, SourceError> {
    let body = strip_fences(text);

    serde_json::from_str(body).map_err(|e| SourceError::MalformedResponse(e.to_string()))
}

/// Strip a surrounding ``` or ```json fence, if any.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
