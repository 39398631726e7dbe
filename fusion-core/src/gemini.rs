//! Gemini API client
//!
//! Shared types and the client for the Gemini `generateContent` REST
//! endpoint. One client is constructed at startup from [`Config`] and passed
//! to the generation pipeline; it is read-only afterwards.

use crate::config::Config;
use crate::error::GenerateError;
use crate::generator::TextGenerator;
use crate::http::get_client;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Request payload for the Gemini generateContent API
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Create a request carrying a single user prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
                role: None,
            }],
        }
    }
}

/// A block of model input or output
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    pub text: String,
}

/// Response from the Gemini generateContent API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let content = candidate.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }

    /// Like [`Self::text`], but an empty answer is an error
    pub fn text_or_err(&self) -> Result<String, GenerateError> {
        self.text().ok_or(GenerateError::EmptyResponse)
    }
}

/// A single response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// Handle to the Gemini text-generation service
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.model.clone(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and return the generated text
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerateError> {
        use std::time::Instant;

        let client = get_client();
        let start = Instant::now();

        let request = GenerateContentRequest::new(prompt);
        let url = format!("{}/{}:generateContent", API_BASE_URL, self.model);

        let response = client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let duration_ms = start.elapsed().as_millis();

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(
                status = %status,
                duration_ms = %duration_ms,
                "Gemini API error"
            );
            return Err(match status.as_u16() {
                401 | 403 => GenerateError::Unauthorized,
                429 => GenerateError::QuotaExhausted,
                code => GenerateError::Api {
                    status: code,
                    message: text,
                },
            });
        }

        let result: GenerateContentResponse = response.json().await?;
        let text = result.text_or_err()?;

        info!(
            model = %self.model,
            duration_ms = %duration_ms,
            chars = text.len(),
            "Generation call completed"
        );

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.generate_text(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wraps_prompt_as_single_part() {
        let request = GenerateContentRequest::new("Hello");

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].parts[0].text, "Hello");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""text":"Hello""#));
        // The role field is omitted from the wire format when unset
        assert!(!json.contains("role"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Garlic bread "}, {"text": "is great."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5, "totalTokenCount": 15}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.text().unwrap(), "Garlic bread is great.");
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 15);
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert!(response.text().is_none());
        assert!(matches!(
            response.text_or_err(),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn test_whitespace_only_response_is_empty() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        assert!(response.text().is_none());
    }
}
