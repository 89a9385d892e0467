//! Dictionary Application
//!
//! Rewrites a raw machine/Gemini translation with the user's dictionaries,
//! wrapping every replacement in a red highlight span and recording which
//! entries fired.

use regex::{Captures, Regex};
use std::collections::HashMap;

use super::types::{DictionaryCollection, UsedDictionary};

/// Wrap a replacement in the highlight markup shown by the UI
pub fn highlight(replacement: &str) -> String {
    format!(r#"<span style="color:red">{}</span>"#, replacement)
}

/// Apply keyword-based, then word/single-word replacements to `text`.
///
/// `original_english` is the untranslated source; keyword entries only fire
/// when their key occurs in it (case-insensitive).
pub fn apply_dictionaries(
    text: &str,
    dictionaries: &DictionaryCollection,
    original_english: &str,
) -> (String, Vec<UsedDictionary>) {
    let mut used = Vec::new();
    let mut text = text.to_string();
    let english = original_english.to_lowercase();

    // Longest keywords first
    let mut keywords: Vec<_> = dictionaries.keyword_based.iter().collect();
    keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    for (keyword, entry) in keywords {
        if !entry.enabled || !english.contains(&keyword.to_lowercase()) {
            continue;
        }
        if entry.original.is_empty() || entry.replacement.is_empty() {
            continue;
        }
        if text.contains(&entry.original) {
            text = text.replace(&entry.original, &highlight(&entry.replacement));
            used.push(UsedDictionary::replacement(
                UsedDictionary::KEYWORD_BASED,
                keyword,
                &entry.original,
                &entry.replacement,
            ));
        }
    }

    // single_word entries override word_replacement entries with the same key
    let replacements: HashMap<&str, &str> = dictionaries
        .word_replacement
        .iter()
        .chain(dictionaries.single_word.iter())
        .filter(|(_, entry)| entry.enabled)
        .map(|(key, entry)| (key.as_str(), entry.value.as_str()))
        .collect();

    let Some(pattern) = word_pattern(replacements.keys().copied()) else {
        return (text, used);
    };

    let text = pattern
        .replace_all(&text, |caps: &Captures| {
            let word = &caps[0];
            match replacements.get(word) {
                Some(&replacement) if replacement != word => {
                    used.push(UsedDictionary::replacement(
                        UsedDictionary::WORD_OR_SINGLE,
                        word,
                        word,
                        replacement,
                    ));
                    highlight(replacement)
                }
                _ => word.to_string(),
            }
        })
        .into_owned();

    (text, used)
}

/// Build `\b(k1|k2|...)\b` with the longest keys first so alternation
/// prefers the longest match
fn word_pattern<'a>(keys: impl Iterator<Item = &'a str>) -> Option<Regex> {
    let mut keys: Vec<&str> = keys.filter(|k| !k.is_empty()).collect();
    if keys.is_empty() {
        return None;
    }
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&format!(r"\b({})\b", alternation)) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to build dictionary pattern");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::types::{KeywordEntry, WordEntry};

    fn word(value: &str, enabled: bool) -> WordEntry {
        WordEntry {
            value: value.to_string(),
            enabled,
        }
    }

    #[test]
    fn test_no_dictionaries_is_identity() {
        let (text, used) = apply_dictionaries("আমি ভাত খাই", &DictionaryCollection::default(), "I eat rice");
        assert_eq!(text, "আমি ভাত খাই");
        assert!(used.is_empty());
    }

    #[test]
    fn test_whole_word_replacement() {
        let mut dicts = DictionaryCollection::default();
        dicts.word_replacement.insert("cat".to_string(), word("kitty", true));

        let (text, used) = apply_dictionaries("cat catalog cat", &dicts, "");
        assert_eq!(
            text,
            r#"<span style="color:red">kitty</span> catalog <span style="color:red">kitty</span>"#
        );
        assert_eq!(used.len(), 2);
        assert_eq!(used[0].kind, "word_replacement/single_word");
        assert_eq!(used[0].replacement.as_deref(), Some("kitty"));
    }

    #[test]
    fn test_single_word_overrides_and_disabled_skipped() {
        let mut dicts = DictionaryCollection::default();
        dicts.word_replacement.insert("dog".to_string(), word("hound", true));
        dicts.single_word.insert("dog".to_string(), word("pup", true));
        dicts.word_replacement.insert("sun".to_string(), word("star", false));

        let (text, used) = apply_dictionaries("dog sun", &dicts, "");
        assert_eq!(text, r#"<span style="color:red">pup</span> sun"#);
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn test_identity_replacement_is_not_recorded() {
        let mut dicts = DictionaryCollection::default();
        dicts.word_replacement.insert("same".to_string(), word("same", true));

        let (text, used) = apply_dictionaries("same", &dicts, "");
        assert_eq!(text, "same");
        assert!(used.is_empty());
    }

    #[test]
    fn test_longest_word_wins() {
        let mut dicts = DictionaryCollection::default();
        dicts.word_replacement.insert("new".to_string(), word("N", true));
        dicts.word_replacement.insert("new york".to_string(), word("NY", true));

        let (text, _) = apply_dictionaries("new york is new", &dicts, "");
        assert_eq!(
            text,
            r#"<span style="color:red">NY</span> is <span style="color:red">N</span>"#
        );
    }

    #[test]
    fn test_keyword_requires_english_match() {
        let mut dicts = DictionaryCollection::default();
        dicts.keyword_based.insert(
            "Bank".to_string(),
            KeywordEntry {
                original: "তীর".to_string(),
                replacement: "ব্যাংক".to_string(),
                enabled: true,
            },
        );

        let (text, used) = apply_dictionaries("নদীর তীর", &dicts, "the river side");
        assert_eq!(text, "নদীর তীর");
        assert!(used.is_empty());

        let (text, used) = apply_dictionaries("নদীর তীর", &dicts, "I went to the BANK");
        assert_eq!(text, r#"নদীর <span style="color:red">ব্যাংক</span>"#);
        assert_eq!(used.len(), 1);
        assert_eq!(used[0].kind, "keyword_based");
        assert_eq!(used[0].key.as_deref(), Some("Bank"));
    }

    #[test]
    fn test_keyword_with_empty_original_is_skipped() {
        let mut dicts = DictionaryCollection::default();
        dicts.keyword_based.insert(
            "bank".to_string(),
            KeywordEntry {
                original: String::new(),
                replacement: "ব্যাংক".to_string(),
                enabled: true,
            },
        );

        let (text, used) = apply_dictionaries("তীর", &dicts, "bank");
        assert_eq!(text, "তীর");
        assert!(used.is_empty());
    }
}
