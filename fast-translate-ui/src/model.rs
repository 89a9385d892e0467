//! Wire Types
//!
//! Shapes returned by the Fast Translate API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four dictionary categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DictionaryCategory {
    WordReplacement,
    KeywordBased,
    SingleWord,
    GeminiKeywordPrompts,
}

impl DictionaryCategory {
    pub const ALL: [DictionaryCategory; 4] = [
        DictionaryCategory::WordReplacement,
        DictionaryCategory::KeywordBased,
        DictionaryCategory::SingleWord,
        DictionaryCategory::GeminiKeywordPrompts,
    ];

    /// Value sent as `dict_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryCategory::WordReplacement => "word_replacement",
            DictionaryCategory::KeywordBased => "keyword_based",
            DictionaryCategory::SingleWord => "single_word",
            DictionaryCategory::GeminiKeywordPrompts => "gemini_keyword_prompts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DictionaryCategory::WordReplacement => "Word Replacement",
            DictionaryCategory::KeywordBased => "Keyword Based",
            DictionaryCategory::SingleWord => "Single Word",
            DictionaryCategory::GeminiKeywordPrompts => "Gemini Keyword Prompts",
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WordEntry {
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct KeywordEntry {
    pub original: String,
    pub replacement: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PromptEntry {
    #[serde(default)]
    pub keyword: Option<String>,
    pub prompt: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// All dictionaries as served by `GET /dictionaries`
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
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

/// Saved API keys and model names
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api_keys: Vec<String>,
    #[serde(default)]
    pub model_names: Vec<String>,
    #[serde(default)]
    pub current_api_key: String,
    #[serde(default)]
    pub current_model_name: String,
}

/// One prompt or dictionary entry reported by `/translate`
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UsedDictionary {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TranslationResult {
    /// Translation with highlight markup
    pub translation: String,
    #[serde(default)]
    pub used_dictionaries: Vec<UsedDictionary>,
}

/// Values typed into one category's entry form
#[derive(Clone, Debug, PartialEq)]
pub enum EntryDraft {
    /// `word_replacement` or `single_word`
    Word {
        category: DictionaryCategory,
        key: String,
        value: String,
    },
    Keyword {
        key: String,
        original: String,
        replacement: String,
    },
    Prompt {
        key: String,
        prompt: String,
    },
}

impl EntryDraft {
    /// Build a draft from a form's key and its two value fields.
    ///
    /// `first` is the value, the original text or the prompt; `second` is
    /// only read for `keyword_based`.
    pub fn from_fields(
        category: DictionaryCategory,
        key: String,
        first: String,
        second: String,
    ) -> Self {
        match category {
            DictionaryCategory::WordReplacement | DictionaryCategory::SingleWord => {
                EntryDraft::Word {
                    category,
                    key,
                    value: first,
                }
            }
            DictionaryCategory::KeywordBased => EntryDraft::Keyword {
                key,
                original: first,
                replacement: second,
            },
            DictionaryCategory::GeminiKeywordPrompts => EntryDraft::Prompt { key, prompt: first },
        }
    }

    pub fn category(&self) -> DictionaryCategory {
        match self {
            EntryDraft::Word { category, .. } => *category,
            EntryDraft::Keyword { .. } => DictionaryCategory::KeywordBased,
            EntryDraft::Prompt { .. } => DictionaryCategory::GeminiKeywordPrompts,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            EntryDraft::Word { key, .. }
            | EntryDraft::Keyword { key, .. }
            | EntryDraft::Prompt { key, .. } => key,
        }
    }

    /// Key and every value field are non-empty
    pub fn is_complete(&self) -> bool {
        match self {
            EntryDraft::Word { key, value, .. } => !key.is_empty() && !value.is_empty(),
            EntryDraft::Keyword {
                key,
                original,
                replacement,
            } => !key.is_empty() && !original.is_empty() && !replacement.is_empty(),
            EntryDraft::Prompt { key, prompt } => !key.is_empty() && !prompt.is_empty(),
        }
    }

    /// The `value` form field: plain text, or JSON for structured categories
    pub fn encoded_value(&self) -> String {
        match self {
            EntryDraft::Word { value, .. } => value.clone(),
            EntryDraft::Keyword {
                original,
                replacement,
                ..
            } => serde_json::json!({
                "original": original,
                "replacement": replacement,
            })
            .to_string(),
            EntryDraft::Prompt { key, prompt } => serde_json::json!({
                "keyword": key,
                "prompt": prompt,
            })
            .to_string(),
        }
    }
}
