//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::dictionary::{Settings, UsedDictionary};

// ============================================
// TRANSLATION DTOs
// ============================================

/// Translation request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,
    /// English source used for keyword matching; defaults to `text`
    #[serde(default)]
    pub original_english_text: Option<String>,
}

/// Translation response
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    /// Translated text with highlight markup
    pub translation: String,
    /// Prompts and entries applied, in order
    pub used_dictionaries: Vec<UsedDictionary>,
}

// ============================================
// PROMPT / MODE / SETTINGS DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AiModeResponse {
    pub ai_mode_enabled: bool,
}

/// Settings as exposed to clients (AI mode is reported separately)
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub api_keys: Vec<String>,
    pub model_names: Vec<String>,
    pub current_api_key: String,
    pub current_model_name: String,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            api_keys: settings.api_keys,
            model_names: settings.model_names,
            current_api_key: settings.current_api_key,
            current_model_name: settings.current_model_name,
        }
    }
}

/// Acknowledgement for mutating endpoints
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub dictionary_entries: usize,
    pub machine_translation: bool,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}
