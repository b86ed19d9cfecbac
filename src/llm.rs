use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{LLMParams, TARGET_LLM_REQUEST};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// The credential travels in the x-goog-api-key header, never the URL:
// transport errors echo the URL into the logs.
fn completion_url(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

// Spans from the first `{` to the last `}`, newlines included.
static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object regex compiles"));

#[derive(Serialize, Deserialize, Debug)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Debug)]
struct GeminiGenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Serialize, Debug)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Deserialize, Debug)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize, Debug)]
struct GeminiError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

/// Sends one prompt to the Gemini generateContent endpoint and returns the
/// raw text answer. Every transport, API, and decoding failure is logged and
/// collapses to `None`; there is exactly one attempt per call.
async fn request_completion(prompt: &str, params: &LLMParams, json_mode: bool) -> Option<String> {
    let url = completion_url(&params.model);

    let request = GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        }],
        generation_config: json_mode.then(|| GeminiGenerationConfig {
            response_mime_type: "application/json".to_string(),
        }),
    };

    debug!(target: TARGET_LLM_REQUEST, "Sending request to model {} (json_mode: {})", params.model, json_mode);

    let client = reqwest::Client::new();
    let response = match client
        .post(&url)
        .header("x-goog-api-key", params.api_key.as_str())
        .json(&request)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!(target: TARGET_LLM_REQUEST, "Failed to send request to Gemini API: {}", e);
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(target: TARGET_LLM_REQUEST, "Gemini API returned status {}: {}", status, body);
        return None;
    }

    let decoded: GeminiResponse = match response.json().await {
        Ok(decoded) => decoded,
        Err(e) => {
            error!(target: TARGET_LLM_REQUEST, "Failed to decode Gemini API response: {}", e);
            return None;
        }
    };

    if let Some(error) = decoded.error {
        error!(target: TARGET_LLM_REQUEST, "Gemini API error: {}", error.message);
        return None;
    }

    let text = decoded
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text);

    match text {
        Some(text) => {
            debug!(target: TARGET_LLM_REQUEST, "Received response ({} chars)", text.chars().count());
            Some(text)
        }
        None => {
            warn!(target: TARGET_LLM_REQUEST, "Gemini API response carried no candidates");
            None
        }
    }
}

/// Generates a plain text response for the given prompt.
pub async fn generate_text_response(prompt: &str, params: &LLMParams) -> Option<String> {
    request_completion(prompt, params, false).await
}

/// Generates a response with JSON output requested and decodes it.
///
/// Models wrap the object in prose or code fences often enough that the JSON
/// span is cut out with [`extract_json_object`] before decoding.
pub async fn generate_json_response(prompt: &str, params: &LLMParams) -> Option<Value> {
    let text = request_completion(prompt, params, true).await?;

    let object = match extract_json_object(&text) {
        Some(object) => object,
        None => {
            warn!(target: TARGET_LLM_REQUEST, "Response contained no JSON object: {}", text);
            return None;
        }
    };

    match serde_json::from_str(object) {
        Ok(value) => Some(value),
        Err(e) => {
            error!(target: TARGET_LLM_REQUEST, "Failed to parse JSON from response: {}", e);
            None
        }
    }
}

/// Best-effort JSON extraction: grabs the span from the first `{` to the
/// last `}` in the text, or `None` when no braced span exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}
