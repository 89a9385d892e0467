//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;
use crate::translation::{CloudTranslateConfig, GeminiConfig};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub translation: TranslationConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI bundle, served at `/`
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

/// Translation provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Initial Gemini API key (clients can save others at runtime)
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_gemini_url")]
    pub gemini_base_url: String,

    #[serde(default = "default_project_id")]
    pub project_id: String,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_cloud_model")]
    pub cloud_model: String,

    /// OAuth token for Cloud Translation; machine translation is disabled
    /// without one
    #[serde(default)]
    pub cloud_access_token: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_gemini_url() -> String {
    GeminiConfig::default().base_url
}

fn default_project_id() -> String {
    CloudTranslateConfig::default().project_id
}

fn default_location() -> String {
    CloudTranslateConfig::default().location
}

fn default_cloud_model() -> String {
    CloudTranslateConfig::default().model
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: default_gemini_url(),
            project_id: default_project_id(),
            location: default_location(),
            cloud_model: default_cloud_model(),
            cloud_access_token: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl TranslationConfig {
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            base_url: self.gemini_base_url.clone(),
            request_timeout_ms: self.request_timeout_secs * 1000,
        }
    }

    /// Cloud Translation settings, if an access token is configured
    pub fn cloud(&self) -> Option<CloudTranslateConfig> {
        let token = self.cloud_access_token.as_ref().filter(|t| !t.is_empty())?;

        Some(CloudTranslateConfig {
            project_id: self.project_id.clone(),
            location: self.location.clone(),
            model: self.cloud_model.clone(),
            access_token: token.clone(),
            request_timeout_ms: self.request_timeout_secs * 1000,
            ..Default::default()
        })
    }
}

/// Dictionary store configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// JSON file backing the store; in-memory only when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("fast-translate").join("config.toml")),
            Some(PathBuf::from("/etc/fast-translate/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// API server settings derived from `[server]`
    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            static_dir: self.server.static_dir.clone().map(PathBuf::from),
            ..Default::default()
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("FAST_TRANSLATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("FAST_TRANSLATE_PORT").or_else(|| var("PORT")) {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = var("FAST_TRANSLATE_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        // Storage overrides
        if let Some(path) = var("FAST_TRANSLATE_STORE_PATH") {
            self.storage.path = Some(path);
        }

        // Translation overrides
        if let Some(key) = var("GEMINI_API_KEY") {
            self.translation.gemini_api_key = Some(key);
        }
        if let Some(project) = var("PROJECT_ID") {
            self.translation.project_id = project;
        }
        if let Some(location) = var("LOCATION") {
            self.translation.location = location;
        }
        if let Some(model) = var("GOOGLE_CLOUD_MODEL") {
            self.translation.cloud_model = model;
        }
        if let Some(token) = var("GOOGLE_CLOUD_ACCESS_TOKEN") {
            self.translation.cloud_access_token = Some(token);
        }

        // Logging overrides
        if let Some(level) = var("FAST_TRANSLATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FAST_TRANSLATE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Fast Translate Configuration
#
# Environment variables override these settings:
# - FAST_TRANSLATE_HOST, FAST_TRANSLATE_PORT (or PORT)
# - FAST_TRANSLATE_STATIC_DIR
# - FAST_TRANSLATE_STORE_PATH
# - GEMINI_API_KEY, PROJECT_ID, LOCATION, GOOGLE_CLOUD_MODEL
# - GOOGLE_CLOUD_ACCESS_TOKEN
# - FAST_TRANSLATE_LOG_LEVEL, FAST_TRANSLATE_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 8000

# Built UI bundle (trunk build output) served at /
# static_dir = "fast-translate-ui/dist"

[translation]
# Initial Gemini API key; more can be saved from the UI
# gemini_api_key = ""

gemini_base_url = "https://generativelanguage.googleapis.com"

# Google Cloud Translation (used when no keyword prompt matches)
project_id = "534521643480"
location = "us-central1"
cloud_model = "projects/534521643480/locations/us-central1/models/NM3ad0dd20ffa743ba"
# cloud_access_token = ""

request_timeout_secs = 60

[storage]
# Persist dictionaries, prompt and settings to this file
# path = "~/.local/share/fast-translate/store.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.translation.location, "us-central1");
        assert!(config.translation.cloud().is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "7000"),
            ("GEMINI_API_KEY", "gem-key"),
            ("GOOGLE_CLOUD_ACCESS_TOKEN", "ya29.token"),
            ("FAST_TRANSLATE_STORE_PATH", "/tmp/store.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.translation.gemini_api_key.as_deref(), Some("gem-key"));
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/store.json"));

        let cloud = config.translation.cloud().unwrap();
        assert_eq!(cloud.access_token, "ya29.token");
        assert_eq!(cloud.target_language, "bn");
    }

    #[test]
    fn test_api_config_from_server_section() {
        let mut config = Config::default();
        config.server.static_dir = Some("dist".to_string());

        let api = config.api();
        assert_eq!(api.addr(), "0.0.0.0:8000");
        assert_eq!(api.static_dir, Some(PathBuf::from("dist")));
    }
}
