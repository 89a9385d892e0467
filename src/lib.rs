//! # Fast Translate
//!
//! English to Bengali translation service with user-managed replacement
//! dictionaries, keyword-triggered Gemini prompts and an "AI mode" that
//! routes everything through Gemini.
//!
//! ## Modules
//!
//! - [`dictionary`]: dictionary types, the shared store and dictionary application
//! - [`translation`]: Gemini and Cloud Translation clients plus the engine choosing between them
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fast_translate::dictionary::{DictionaryCategory, DictionaryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DictionaryStore::new(None);
//!     store
//!         .upsert(DictionaryCategory::SingleWord, "court", "আদালত")
//!         .await?;
//!
//!     let snapshot = store.snapshot().await;
//!     let (text, used) = fast_translate::dictionary::apply_dictionaries(
//!         "court",
//!         &snapshot.dictionaries,
//!         "court",
//!     );
//!
//!     println!("{} ({} entries used)", text, used.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dictionary;
pub mod translation;

// Re-export top-level types for convenience
pub use dictionary::{
    DictionaryCategory, DictionaryCollection, DictionaryStore, Settings, StoreError,
    StoreSnapshot, UsedDictionary,
};

pub use translation::{TranslationEngine, TranslationError, TranslationOutcome};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::Config;
