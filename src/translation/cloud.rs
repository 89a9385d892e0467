//! Cloud Translation Client
//!
//! Google Cloud Translation v3 `translateText`, authenticated with an OAuth
//! bearer token, translating `en-US` to Bengali with a custom model.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::{map_request_error, MachineTranslator, ProviderError};

/// Configuration for the Cloud Translation client
#[derive(Debug, Clone)]
pub struct CloudTranslateConfig {
    pub base_url: String,
    pub project_id: String,
    pub location: String,
    /// Full model resource name
    pub model: String,
    /// OAuth access token
    pub access_token: String,
    pub source_language: String,
    pub target_language: String,
    pub request_timeout_ms: u64,
}

impl Default for CloudTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translation.googleapis.com".to_string(),
            project_id: "534521643480".to_string(),
            location: "us-central1".to_string(),
            model: "projects/534521643480/locations/us-central1/models/NM3ad0dd20ffa743ba"
                .to_string(),
            access_token: String::new(),
            source_language: "en-US".to_string(),
            target_language: "bn".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Cloud Translation v3 client
pub struct CloudTranslateClient {
    client: Client,
    config: CloudTranslateConfig,
}

impl CloudTranslateClient {
    pub fn new(config: CloudTranslateConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(ProviderError::Request)?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v3/projects/{}/locations/{}:translateText",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.location
        )
    }
}

#[async_trait]
impl MachineTranslator for CloudTranslateClient {
    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let body = TranslateTextRequest {
            contents: vec![text.to_string()],
            mime_type: "text/plain".to_string(),
            source_language_code: self.config.source_language.clone(),
            target_language_code: self.config.target_language.clone(),
            model: self.config.model.clone(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.access_token)
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

        let result: TranslateTextResponse =
            response.json().await.map_err(ProviderError::Request)?;

        result
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateTextRequest {
    contents: Vec<String>,
    mime_type: String,
    source_language_code: String,
    target_language_code: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct TranslateTextResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}
