//! Dictionary Store
//!
//! Holds the dictionaries, the general Gemini prompt and translation
//! settings. State lives in memory behind a `tokio::sync::RwLock`; when a
//! store path is configured every mutation is written through to a JSON
//! file (temp file + rename) and the file is reloaded on startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::error::{StoreError, StoreResult};
use super::types::{
    remember, DictionaryCategory, DictionaryCollection, KeywordEntry, PromptEntry, Settings,
    WordEntry,
};

/// General prompt used until a client saves a different one
pub const DEFAULT_GENERAL_PROMPT: &str = "You are an experienced English to Bengali translator. \
You will translate the provided text into fluent and accurate bengali. \
Do not output anything other than the translation.";

/// Everything the store owns, as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub dictionaries: DictionaryCollection,
    #[serde(default = "default_general_prompt")]
    pub general_prompt: String,
    #[serde(default)]
    pub settings: Settings,
}

fn default_general_prompt() -> String {
    DEFAULT_GENERAL_PROMPT.to_string()
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            dictionaries: DictionaryCollection::default(),
            general_prompt: default_general_prompt(),
            settings: Settings::default(),
        }
    }
}

/// Dictionary, prompt and settings store shared by all handlers
pub struct DictionaryStore {
    state: RwLock<StoreSnapshot>,
    path: Option<PathBuf>,
}

impl DictionaryStore {
    /// Create an in-memory store seeded with an optional Gemini API key
    pub fn new(default_api_key: Option<String>) -> Self {
        let mut snapshot = StoreSnapshot::default();
        if let Some(key) = default_api_key {
            snapshot.settings.current_api_key = key;
        }

        Self {
            state: RwLock::new(snapshot),
            path: None,
        }
    }

    /// Open a store backed by `path`, loading existing state if present
    pub async fn open(path: impl AsRef<Path>, default_api_key: Option<String>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let snapshot: StoreSnapshot = serde_json::from_str(&content)?;
                tracing::info!(
                    path = %path.display(),
                    entries = snapshot.dictionaries.len(),
                    "Loaded dictionary store"
                );
                snapshot
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No store file yet, starting empty");
                let mut snapshot = StoreSnapshot::default();
                if let Some(key) = default_api_key {
                    snapshot.settings.current_api_key = key;
                }
                snapshot
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path,
                    error: e.to_string(),
                })
            }
        };

        Ok(Self {
            state: RwLock::new(snapshot),
            path: Some(path),
        })
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current dictionaries
    pub async fn dictionaries(&self) -> DictionaryCollection {
        self.state.read().await.dictionaries.clone()
    }

    /// Full copy of the store state
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    /// Insert or replace an entry.
    ///
    /// `value` is a plain string for word categories and a JSON object for
    /// `keyword_based` / `gemini_keyword_prompts`.
    pub async fn upsert(
        &self,
        category: DictionaryCategory,
        key: &str,
        value: &str,
    ) -> StoreResult<()> {
        let invalid = |e: serde_json::Error| StoreError::InvalidValue {
            category: category.to_string(),
            error: e.to_string(),
        };

        let mut state = self.state.write().await;
        let dictionaries = &mut state.dictionaries;

        match category {
            DictionaryCategory::WordReplacement | DictionaryCategory::SingleWord => {
                let entry = WordEntry {
                    value: value.to_string(),
                    enabled: true,
                };
                let map = if category == DictionaryCategory::WordReplacement {
                    &mut dictionaries.word_replacement
                } else {
                    &mut dictionaries.single_word
                };
                map.insert(key.to_string(), entry);
            }
            DictionaryCategory::KeywordBased => {
                let entry: KeywordEntry = serde_json::from_str(value).map_err(invalid)?;
                dictionaries.keyword_based.insert(key.to_string(), entry);
            }
            DictionaryCategory::GeminiKeywordPrompts => {
                let entry: PromptEntry = serde_json::from_str(value).map_err(invalid)?;
                dictionaries.gemini_keyword_prompts.insert(key.to_string(), entry);
            }
        }

        tracing::debug!(category = %category, key, "Upserted dictionary entry");
        self.persist(&state).await
    }

    /// Delete an entry; `Ok(false)` if it did not exist
    pub async fn delete(&self, category: DictionaryCategory, key: &str) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        if !state.dictionaries.remove(category, key) {
            return Ok(false);
        }
        self.persist(&state).await?;
        Ok(true)
    }

    /// Enable or disable an entry; `Ok(false)` if it did not exist
    pub async fn toggle(
        &self,
        category: DictionaryCategory,
        key: &str,
        enabled: bool,
    ) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        if !state.dictionaries.set_enabled(category, key, enabled) {
            return Ok(false);
        }
        self.persist(&state).await?;
        Ok(true)
    }

    pub async fn general_prompt(&self) -> String {
        self.state.read().await.general_prompt.clone()
    }

    pub async fn set_general_prompt(&self, prompt: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.general_prompt = prompt.to_string();
        self.persist(&state).await
    }

    pub async fn ai_mode(&self) -> bool {
        self.state.read().await.settings.ai_mode_enabled
    }

    pub async fn set_ai_mode(&self, enabled: bool) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.settings.ai_mode_enabled = enabled;
        tracing::info!(enabled, "AI mode changed");
        self.persist(&state).await
    }

    /// Remember and select an API key and/or model name.
    ///
    /// Empty values are ignored.
    pub async fn save_settings(
        &self,
        api_key: Option<&str>,
        model_name: Option<&str>,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let settings = &mut state.settings;

        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            remember(&mut settings.api_keys, key);
            settings.current_api_key = key.to_string();
        }
        if let Some(model) = model_name.filter(|m| !m.is_empty()) {
            remember(&mut settings.model_names, model);
            settings.current_model_name = model.to_string();
        }

        self.persist(&state).await
    }

    pub async fn settings(&self) -> Settings {
        self.state.read().await.settings.clone()
    }

    async fn persist(&self, state: &StoreSnapshot) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let io_err = |e: std::io::Error| StoreError::Io {
            path: path.clone(),
            error: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let json = serde_json::to_vec_pretty(state)?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, path).await.map_err(io_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_upsert_plain_and_structured() {
        let store = DictionaryStore::new(None);

        store
            .upsert(DictionaryCategory::WordReplacement, "hello", "হ্যালো")
            .await
            .unwrap();
        store
            .upsert(
                DictionaryCategory::KeywordBased,
                "bank",
                r#"{"original": "তীর", "replacement": "ব্যাংক"}"#,
            )
            .await
            .unwrap();
        store
            .upsert(
                DictionaryCategory::GeminiKeywordPrompts,
                "legal",
                r#"{"keyword": "legal", "prompt": "Use formal register."}"#,
            )
            .await
            .unwrap();

        let dicts = store.dictionaries().await;
        assert_eq!(dicts.word_replacement["hello"].value, "হ্যালো");
        assert!(dicts.word_replacement["hello"].enabled);
        assert_eq!(dicts.keyword_based["bank"].replacement, "ব্যাংক");
        assert!(dicts.keyword_based["bank"].enabled);
        assert_eq!(dicts.gemini_keyword_prompts["legal"].prompt, "Use formal register.");
    }

    #[tokio::test]
    async fn test_upsert_rejects_invalid_json() {
        let store = DictionaryStore::new(None);
        let result = store
            .upsert(DictionaryCategory::KeywordBased, "bank", "not json")
            .await;
        assert!(matches!(result, Err(StoreError::InvalidValue { .. })));
    }

    #[tokio::test]
    async fn test_delete_and_toggle_report_missing_keys() {
        let store = DictionaryStore::new(None);
        store
            .upsert(DictionaryCategory::SingleWord, "cat", "বিড়াল")
            .await
            .unwrap();

        assert!(store.toggle(DictionaryCategory::SingleWord, "cat", false).await.unwrap());
        assert!(!store.dictionaries().await.single_word["cat"].enabled);
        assert!(!store.toggle(DictionaryCategory::SingleWord, "dog", false).await.unwrap());

        assert!(store.delete(DictionaryCategory::SingleWord, "cat").await.unwrap());
        assert!(!store.delete(DictionaryCategory::SingleWord, "cat").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_settings_ignores_empty_values() {
        let store = DictionaryStore::new(Some("env-key".to_string()));
        assert_eq!(store.settings().await.current_api_key, "env-key");

        store.save_settings(Some("key-1"), Some("")).await.unwrap();
        store.save_settings(None, Some("gemini-pro")).await.unwrap();
        store.save_settings(Some("key-2"), None).await.unwrap();

        let settings = store.settings().await;
        assert_eq!(settings.api_keys, vec!["key-2", "key-1"]);
        assert_eq!(settings.model_names, vec!["gemini-pro"]);
        assert_eq!(settings.current_api_key, "key-2");
        assert_eq!(settings.current_model_name, "gemini-pro");
    }

    #[tokio::test]
    async fn test_general_prompt_and_ai_mode() {
        let store = DictionaryStore::new(None);
        assert_eq!(store.general_prompt().await, DEFAULT_GENERAL_PROMPT);
        assert!(!store.ai_mode().await);

        store.set_general_prompt("Translate tersely.").await.unwrap();
        store.set_ai_mode(true).await.unwrap();

        assert_eq!(store.general_prompt().await, "Translate tersely.");
        assert!(store.ai_mode().await);
    }

    #[tokio::test]
    async fn test_persistence_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        {
            let store = DictionaryStore::open(&path, None).await.unwrap();
            store
                .upsert(DictionaryCategory::WordReplacement, "hello", "hi")
                .await
                .unwrap();
            store.set_ai_mode(true).await.unwrap();
        }

        let reopened = DictionaryStore::open(&path, Some("ignored".to_string()))
            .await
            .unwrap();
        let snapshot = reopened.snapshot().await;
        assert_eq!(snapshot.dictionaries.word_replacement["hello"].value, "hi");
        assert!(snapshot.settings.ai_mode_enabled);
        assert_eq!(snapshot.settings.current_api_key, "");
    }
}
