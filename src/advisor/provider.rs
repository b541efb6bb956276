//! Text-generation providers

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdvisorSettings;
use crate::error::{BecaError, BecaResult};

/// Anything that can turn a prompt into free-form text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &'static str;

    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str) -> BecaResult<String>;
}

// ============================================================================
// Gemini Provider
// ============================================================================

/// Google Gemini `generateContent` provider
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Build a client from advisor settings. A missing API key is not an
    /// error here; it is reported when a request is attempted.
    pub fn new(settings: &AdvisorSettings) -> BecaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| BecaError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn user_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Pull the generated text out of a `generateContent` response body.
///
/// The text parts of the first candidate are concatenated. A candidate with no
/// text yields an empty string; a response with no candidates is an error.
fn extract_text(body: &str) -> BecaResult<String> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| BecaError::InvalidResponse(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(BecaError::InvalidResponse(reason));
    };

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

/// Best-effort message from an error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, prompt: &str) -> BecaResult<String> {
        let api_key = self.api_key.as_deref().ok_or(BecaError::MissingApiKey)?;

        debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(|e| BecaError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BecaError::Service {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::user_prompt("hola")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hola" }] }]
            })
        );
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let body = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hola. " }, { "text": "Nota: 7/10" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Hola. Nota: 7/10");
    }

    #[test]
    fn test_extract_text_empty_candidate() {
        let body = r#"{ "candidates": [ { "finishReason": "SAFETY" } ] }"#;
        assert_eq!(extract_text(body).unwrap(), "");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let body = r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#;
        let err = extract_text(body).unwrap_err();
        assert!(matches!(err, BecaError::InvalidResponse(ref m) if m == "SAFETY"));
    }

    #[test]
    fn test_extract_text_malformed() {
        assert!(matches!(
            extract_text("<html>"),
            Err(BecaError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_message() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" } }"#;
        assert_eq!(error_message(body), "API key not valid");
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_endpoint() {
        let settings = AdvisorSettings {
            base_url: "http://localhost:9/v1beta/".into(),
            ..AdvisorSettings::default()
        };
        let client = GeminiClient::new(&settings).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = GeminiClient::new(&AdvisorSettings::default()).unwrap();
        let err = client.generate("hola").await.unwrap_err();
        assert!(matches!(err, BecaError::MissingApiKey));
    }
}
