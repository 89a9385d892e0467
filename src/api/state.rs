//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::dictionary::DictionaryStore;
use crate::translation::TranslationEngine;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dictionaries, general prompt and settings
    pub store: Arc<DictionaryStore>,
    /// Translation providers
    pub engine: Arc<TranslationEngine>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by /health
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        store: Arc<DictionaryStore>,
        engine: Arc<TranslationEngine>,
        config: ApiConfig,
    ) -> Self {
        Self {
            store,
            engine,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Built UI bundle served as the router fallback
    pub static_dir: Option<PathBuf>,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: None,
            max_body_size: 2 * 1024 * 1024,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
