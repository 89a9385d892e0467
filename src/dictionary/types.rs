//! Dictionary Types
//!
//! Entry shapes for the four dictionary categories, the collection that
//! holds them, and the settings record shared with clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::StoreError;

/// Default Gemini model used until a client saves another one
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash-preview-05-20";

/// Maximum number of remembered API keys / model names
pub const SETTINGS_HISTORY_LIMIT: usize = 10;

/// One of the four fixed dictionary categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryCategory {
    /// Whole-word replacement applied to the translated text
    WordReplacement,
    /// Replacement triggered by an English keyword in the source text
    KeywordBased,
    /// Whole-word replacement for single words (wins over word_replacement)
    SingleWord,
    /// Extra Gemini instructions triggered by an English keyword
    GeminiKeywordPrompts,
}

impl DictionaryCategory {
    pub const ALL: [DictionaryCategory; 4] = [
        DictionaryCategory::WordReplacement,
        DictionaryCategory::KeywordBased,
        DictionaryCategory::SingleWord,
        DictionaryCategory::GeminiKeywordPrompts,
    ];

    /// Wire name, as used in `dict_type` form fields
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryCategory::WordReplacement => "word_replacement",
            DictionaryCategory::KeywordBased => "keyword_based",
            DictionaryCategory::SingleWord => "single_word",
            DictionaryCategory::GeminiKeywordPrompts => "gemini_keyword_prompts",
        }
    }

    /// Whether `value` is a JSON object rather than a plain string
    pub fn has_structured_value(&self) -> bool {
        matches!(
            self,
            DictionaryCategory::KeywordBased | DictionaryCategory::GeminiKeywordPrompts
        )
    }
}

impl fmt::Display for DictionaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DictionaryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

fn default_enabled() -> bool {
    true
}

/// Plain replacement entry (`word_replacement`, `single_word`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub value: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Keyword-triggered replacement (`keyword_based`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Keyword-triggered Gemini prompt (`gemini_keyword_prompts`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// All dictionaries, keyed by category then entry key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryCollection {
    #[serde(default)]
    pub word_replacement: BTreeMap<String, WordEntry>,
    #[serde(default)]
    pub keyword_based: BTreeMap<String, KeywordEntry>,
    #[serde(default)]
    pub single_word: BTreeMap<String, WordEntry>,
    #[serde(default)]
    pub gemini_keyword_prompts: BTreeMap<String, PromptEntry>,
}

impl DictionaryCollection {
    /// Whether `key` exists in `category`
    pub fn contains(&self, category: DictionaryCategory, key: &str) -> bool {
        match category {
            DictionaryCategory::WordReplacement => self.word_replacement.contains_key(key),
            DictionaryCategory::KeywordBased => self.keyword_based.contains_key(key),
            DictionaryCategory::SingleWord => self.single_word.contains_key(key),
            DictionaryCategory::GeminiKeywordPrompts => {
                self.gemini_keyword_prompts.contains_key(key)
            }
        }
    }

    /// Remove an entry, returning whether it existed
    pub fn remove(&mut self, category: DictionaryCategory, key: &str) -> bool {
        match category {
            DictionaryCategory::WordReplacement => self.word_replacement.remove(key).is_some(),
            DictionaryCategory::KeywordBased => self.keyword_based.remove(key).is_some(),
            DictionaryCategory::SingleWord => self.single_word.remove(key).is_some(),
            DictionaryCategory::GeminiKeywordPrompts => {
                self.gemini_keyword_prompts.remove(key).is_some()
            }
        }
    }

    /// Set the enabled flag of an entry, returning whether it existed
    pub fn set_enabled(&mut self, category: DictionaryCategory, key: &str, enabled: bool) -> bool {
        let flag = match category {
            DictionaryCategory::WordReplacement => {
                self.word_replacement.get_mut(key).map(|e| &mut e.enabled)
            }
            DictionaryCategory::KeywordBased => {
                self.keyword_based.get_mut(key).map(|e| &mut e.enabled)
            }
            DictionaryCategory::SingleWord => self.single_word.get_mut(key).map(|e| &mut e.enabled),
            DictionaryCategory::GeminiKeywordPrompts => {
                self.gemini_keyword_prompts.get_mut(key).map(|e| &mut e.enabled)
            }
        };

        match flag {
            Some(flag) => {
                *flag = enabled;
                true
            }
            None => false,
        }
    }

    /// Total number of entries across all categories
    pub fn len(&self) -> usize {
        self.word_replacement.len()
            + self.keyword_based.len()
            + self.single_word.len()
            + self.gemini_keyword_prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Translation settings (current credentials plus MRU history)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ai_mode_enabled: bool,
    #[serde(default)]
    pub api_keys: Vec<String>,
    #[serde(default)]
    pub model_names: Vec<String>,
    #[serde(default)]
    pub current_api_key: String,
    #[serde(default)]
    pub current_model_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_mode_enabled: false,
            api_keys: Vec::new(),
            model_names: Vec::new(),
            current_api_key: String::new(),
            current_model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

/// Put `value` at the front of an MRU list unless already present
pub(crate) fn remember(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.insert(0, value.to_string());
        list.truncate(SETTINGS_HISTORY_LIMIT);
    }
}

/// A dictionary entry or prompt that contributed to a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsedDictionary {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl UsedDictionary {
    pub const KEYWORD_BASED: &'static str = "keyword_based";
    pub const WORD_OR_SINGLE: &'static str = "word_replacement/single_word";
    pub const GEMINI_KEYWORD_PROMPT: &'static str = "gemini_keyword_prompt";
    pub const GEMINI_AI_MODE: &'static str = "gemini_ai_mode";

    /// Record of a replacement made in the translated text
    pub fn replacement(kind: &str, key: &str, original: &str, replacement: &str) -> Self {
        Self {
            kind: kind.to_string(),
            key: Some(key.to_string()),
            original: Some(original.to_string()),
            replacement: Some(replacement.to_string()),
            prompt: None,
        }
    }

    /// Record of a keyword prompt sent to Gemini
    pub fn keyword_prompt(key: &str, prompt: &str) -> Self {
        Self {
            kind: Self::GEMINI_KEYWORD_PROMPT.to_string(),
            key: Some(key.to_string()),
            original: None,
            replacement: None,
            prompt: Some(prompt.to_string()),
        }
    }

    /// Record of the general prompt driving AI mode
    pub fn ai_mode(prompt: &str) -> Self {
        Self {
            kind: Self::GEMINI_AI_MODE.to_string(),
            key: None,
            original: None,
            replacement: None,
            prompt: Some(prompt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in DictionaryCategory::ALL {
            let parsed: DictionaryCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("settings".parse::<DictionaryCategory>().is_err());
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let entry: KeywordEntry =
            serde_json::from_str(r#"{"original": "ক", "replacement": "খ"}"#).unwrap();
        assert!(entry.enabled);
    }

    #[test]
    fn test_collection_ignores_unknown_sections() {
        let json = r#"{"word_replacement": {"hello": {"value": "hi", "enabled": false}},
                       "settings": {"ai_mode_enabled": true}}"#;
        let collection: DictionaryCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(!collection.word_replacement["hello"].enabled);
    }

    #[test]
    fn test_set_enabled_and_remove() {
        let mut collection = DictionaryCollection::default();
        collection.single_word.insert(
            "cat".to_string(),
            WordEntry { value: "বিড়াল".to_string(), enabled: true },
        );

        assert!(collection.set_enabled(DictionaryCategory::SingleWord, "cat", false));
        assert!(!collection.single_word["cat"].enabled);
        assert!(!collection.set_enabled(DictionaryCategory::WordReplacement, "cat", false));

        assert!(collection.remove(DictionaryCategory::SingleWord, "cat"));
        assert!(!collection.remove(DictionaryCategory::SingleWord, "cat"));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_remember_is_mru_and_capped() {
        let mut list = Vec::new();
        for i in 0..12 {
            remember(&mut list, &format!("k{}", i));
        }
        assert_eq!(list.len(), SETTINGS_HISTORY_LIMIT);
        assert_eq!(list[0], "k11");

        remember(&mut list, "k5");
        assert_eq!(list[0], "k11");
    }

    #[test]
    fn test_used_dictionary_serializes_type_field() {
        let used = UsedDictionary::ai_mode("prompt");
        let json = serde_json::to_value(&used).unwrap();
        assert_eq!(json["type"], "gemini_ai_mode");
        assert!(json.get("key").is_none());
    }
}
