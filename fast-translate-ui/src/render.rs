//! Presentation helpers shared by the controller and components.

use crate::model::{DictionaryCategory, DictionaryCollection, UsedDictionary};

/// Shown instead of an empty used-dictionaries list
pub const NO_ENTRIES_USED: &str = "No dictionary entries used.";

const PROMPT_PREVIEW_CHARS: usize = 50;

/// Remove every `<...>` tag, keeping the text between them
pub fn strip_tags(markup: &str) -> String {
    match regex::Regex::new("<[^>]*>") {
        Ok(re) => re.replace_all(markup, "").into_owned(),
        Err(_) => markup.to_string(),
    }
}

/// Escape text for insertion into markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One rendered dictionary row
#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub category: DictionaryCategory,
    pub key: String,
    pub text: String,
    pub enabled: bool,
}

impl EntryRow {
    /// Label of the enable/disable button
    pub fn toggle_label(&self) -> &'static str {
        if self.enabled {
            "Disable"
        } else {
            "Enable"
        }
    }
}

/// Rows for one category, in key order
pub fn entry_rows(collection: &DictionaryCollection, category: DictionaryCategory) -> Vec<EntryRow> {
    let row = |key: &String, text: String, enabled: bool| EntryRow {
        category,
        key: key.clone(),
        text,
        enabled,
    };

    match category {
        DictionaryCategory::WordReplacement | DictionaryCategory::SingleWord => {
            let entries = if category == DictionaryCategory::WordReplacement {
                &collection.word_replacement
            } else {
                &collection.single_word
            };
            entries
                .iter()
                .map(|(key, e)| row(key, format!("{} → {}", key, e.value), e.enabled))
                .collect()
        }
        DictionaryCategory::KeywordBased => collection
            .keyword_based
            .iter()
            .map(|(key, e)| {
                row(
                    key,
                    format!("{} → {} → {}", key, e.original, e.replacement),
                    e.enabled,
                )
            })
            .collect(),
        DictionaryCategory::GeminiKeywordPrompts => collection
            .gemini_keyword_prompts
            .iter()
            .map(|(key, e)| row(key, format!("{}: {}", key, prompt_preview(&e.prompt)), e.enabled))
            .collect(),
    }
}

fn prompt_preview(prompt: &str) -> String {
    match prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &prompt[..cut]),
        None => prompt.to_string(),
    }
}

/// One line of the used-dictionaries list: a bold label and its detail
#[derive(Clone, Debug, PartialEq)]
pub struct UsedLine {
    pub label: String,
    pub detail: String,
}

pub fn used_line(entry: &UsedDictionary) -> UsedLine {
    let key = entry.key.clone().unwrap_or_default();

    match entry.kind.as_str() {
        "gemini_ai_mode" => UsedLine {
            label: "AI Mode:".to_string(),
            detail: "Used general prompt".to_string(),
        },
        "gemini_keyword_prompt" => UsedLine {
            label: "Keyword Prompt:".to_string(),
            detail: key,
        },
        kind => {
            let target = entry
                .replacement
                .as_deref()
                .filter(|r| !r.is_empty())
                .or(entry.original.as_deref())
                .unwrap_or_default();
            UsedLine {
                label: format!("{}:", kind),
                detail: format!("{} → {}", key, target),
            }
        }
    }
}

pub fn used_lines(entries: &[UsedDictionary]) -> Vec<UsedLine> {
    entries.iter().map(used_line).collect()
}

/// Button text such as "AI Mode: On"
pub fn mode_label(name: &str, on: bool) -> String {
    format!("{}: {}", name, if on { "On" } else { "Off" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PromptEntry, WordEntry};

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags(r#"আমি <span style="color:red">ভাত</span> খাই"#),
            "আমি ভাত খাই"
        );
        assert_eq!(strip_tags("a<b<c>d"), "ad");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
        assert_eq!(strip_tags("<div\nclass=\"loading\">Translating...</div>"), "Translating...");
    }

    #[test]
    fn test_word_row_and_buttons() {
        let mut collection = DictionaryCollection::default();
        collection.word_replacement.insert(
            "hello".to_string(),
            WordEntry {
                value: "hi".to_string(),
                enabled: true,
            },
        );

        let rows = entry_rows(&collection, DictionaryCategory::WordReplacement);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "hello → hi");
        assert_eq!(rows[0].toggle_label(), "Disable");
    }

    #[test]
    fn test_prompt_preview_truncates_at_50_chars() {
        let mut collection = DictionaryCollection::default();
        collection.gemini_keyword_prompts.insert(
            "law".to_string(),
            PromptEntry {
                keyword: Some("law".to_string()),
                prompt: "x".repeat(60),
                enabled: false,
            },
        );
        collection.gemini_keyword_prompts.insert(
            "tax".to_string(),
            PromptEntry {
                keyword: None,
                prompt: "short".to_string(),
                enabled: true,
            },
        );

        let rows = entry_rows(&collection, DictionaryCategory::GeminiKeywordPrompts);
        assert_eq!(rows[0].text, format!("law: {}...", "x".repeat(50)));
        assert_eq!(rows[0].toggle_label(), "Enable");
        assert_eq!(rows[1].text, "tax: short");
    }

    #[test]
    fn test_used_lines() {
        let entries: Vec<UsedDictionary> = serde_json::from_str(
            r#"[
                {"type": "gemini_ai_mode", "prompt": "p"},
                {"type": "gemini_keyword_prompt", "key": "law", "prompt": "p"},
                {"type": "keyword_based", "key": "court", "original": "case", "replacement": "মামলা"},
                {"type": "word_replacement/single_word", "key": "x", "original": "x", "replacement": ""}
            ]"#,
        )
        .unwrap();

        let lines = used_lines(&entries);
        assert_eq!(lines[0].detail, "Used general prompt");
        assert_eq!(lines[1].label, "Keyword Prompt:");
        assert_eq!(lines[1].detail, "law");
        assert_eq!(lines[2].label, "keyword_based:");
        assert_eq!(lines[2].detail, "court → মামলা");
        assert_eq!(lines[3].detail, "x → x");
    }
}
