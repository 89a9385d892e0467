//! Dictionaries
//!
//! User-managed replacement rules applied to translations.
//!
//! - **types**: the four dictionary categories and their entry shapes
//! - **store**: in-memory (optionally file-backed) state shared by handlers
//! - **apply**: rewriting translated text with enabled entries

mod apply;
mod error;
mod store;
mod types;

pub use apply::{apply_dictionaries, highlight};
pub use error::{StoreError, StoreResult};
pub use store::{DictionaryStore, StoreSnapshot, DEFAULT_GENERAL_PROMPT};
pub use types::{
    DictionaryCategory, DictionaryCollection, KeywordEntry, PromptEntry, Settings,
    UsedDictionary, WordEntry, DEFAULT_MODEL_NAME, SETTINGS_HISTORY_LIMIT,
};
