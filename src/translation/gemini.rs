//! Gemini REST Client
//!
//! Text generation through the Generative Language API
//! (`models/{model}:generateContent`).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::{map_request_error, GenerationRequest, ProviderError, TextGenerator};

/// Configuration for the Gemini client
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            request_timeout_ms: 60_000,
        }
    }
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ProviderError::Request)?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(model)
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        let body = GenerateContentRequest {
            system_instruction: request.system_instruction.map(|text| Content {
                role: None,
                parts: vec![Part { text: text.to_string() }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.content.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "text/plain".to_string(),
            },
        };

        let response = self
            .client
            .post(self.endpoint(request.model))
            .header("x-goog-api-key", request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let result: GenerateContentResponse =
            response.json().await.map_err(ProviderError::Request)?;

        let text = result.text();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        tracing::debug!(model = request.model, chars = text.len(), "Gemini generation complete");
        Ok(text)
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_model() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part { text: "sys".to_string() }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: "hello".to_string() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "text/plain".to_string(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["responseMimeType"], "text/plain");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model",
                "parts": [{"text": "আমি "}, {"text": "ভাত খাই"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text(), "আমি ভাত খাই");

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }
}
