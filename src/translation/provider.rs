//! Translation provider seams

use async_trait::async_trait;
use thiserror::Error;

/// One Gemini generation call
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    /// Sent as the model's system instruction when present
    pub system_instruction: Option<&'a str>,
    /// User content
    pub content: &'a str,
}

/// Generative model used for prompt-driven translation
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError>;
}

/// Plain machine translation (English to the configured target language)
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

/// Errors returned by translation providers
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Request timeout")]
    Timeout,
}

pub(crate) fn map_request_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::Unavailable
    } else {
        ProviderError::Request(e)
    }
}
