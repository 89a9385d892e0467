//! Translation Engine
//!
//! Chooses between Gemini (AI mode or keyword prompts) and machine
//! translation, then applies the user's dictionaries to the result.

use std::sync::Arc;
use thiserror::Error;

use super::provider::{GenerationRequest, MachineTranslator, ProviderError, TextGenerator};
use crate::dictionary::{apply_dictionaries, PromptEntry, StoreSnapshot, UsedDictionary};

/// Translation output returned to clients
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    /// Translated text with highlight markup
    pub translation: String,
    /// Prompts and dictionary entries that shaped the translation
    pub used_dictionaries: Vec<UsedDictionary>,
}

/// Translation failures, worded for display to end users
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Input text cannot be empty.")]
    EmptyInput,

    #[error("No Gemini API key configured.")]
    MissingApiKey,

    #[error("An error occurred during AI Mode translation with Gemini.")]
    AiMode(#[source] ProviderError),

    #[error("Translation service unavailable.")]
    Unavailable,

    #[error("An error occurred during translation.")]
    Failed(#[source] ProviderError),
}

impl TranslationError {
    /// Whether the caller, not a provider, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, TranslationError::EmptyInput | TranslationError::MissingApiKey)
    }
}

/// Gemini plus optional machine-translation fallback
pub struct TranslationEngine {
    generator: Arc<dyn TextGenerator>,
    translator: Option<Arc<dyn MachineTranslator>>,
}

impl TranslationEngine {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        translator: Option<Arc<dyn MachineTranslator>>,
    ) -> Self {
        Self {
            generator,
            translator,
        }
    }

    /// Whether a machine translator is configured
    pub fn has_machine_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Translate `text` using the store state captured in `snapshot`.
    ///
    /// `original_english` drives keyword matching for prompts and
    /// keyword-based dictionary entries.
    pub async fn translate(
        &self,
        snapshot: &StoreSnapshot,
        text: &str,
        original_english: &str,
    ) -> Result<TranslationOutcome, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let settings = &snapshot.settings;
        if settings.current_api_key.is_empty() {
            return Err(TranslationError::MissingApiKey);
        }

        let general_prompt = snapshot.general_prompt.as_str();
        let matched = match_keyword_prompt(snapshot, original_english);
        let mut used = Vec::new();

        let raw = if settings.ai_mode_enabled {
            tracing::info!(keyword = ?matched.map(|(k, _)| k), "Translating in AI mode");

            let system_instruction = match matched {
                Some((key, entry)) => {
                    used.push(UsedDictionary::keyword_prompt(key, &entry.prompt));
                    format!("{}\n\n{}", general_prompt, entry.prompt)
                }
                None => {
                    used.push(UsedDictionary::ai_mode(general_prompt));
                    general_prompt.to_string()
                }
            };

            self.generator
                .generate(GenerationRequest {
                    api_key: &settings.current_api_key,
                    model: &settings.current_model_name,
                    system_instruction: Some(&system_instruction),
                    content: text,
                })
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Gemini AI mode translation failed");
                    TranslationError::AiMode(e)
                })?
        } else if let Some((key, entry)) = matched {
            tracing::info!(keyword = key, "Translating with Gemini keyword prompt");

            let content = format!(
                "{}\n\n{}\n\nTranslate the following text to Bengali: {}",
                general_prompt, entry.prompt, text
            );

            let generated = self
                .generator
                .generate(GenerationRequest {
                    api_key: &settings.current_api_key,
                    model: &settings.current_model_name,
                    system_instruction: None,
                    content: &content,
                })
                .await;

            match generated {
                Ok(translation) => {
                    used.push(UsedDictionary::keyword_prompt(key, &entry.prompt));
                    translation
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Gemini keyword translation failed, falling back");
                    self.machine_translate(text).await?
                }
            }
        } else {
            self.machine_translate(text).await?
        };

        let (translation, applied) =
            apply_dictionaries(&raw, &snapshot.dictionaries, original_english);
        used.extend(applied);

        Ok(TranslationOutcome {
            translation,
            used_dictionaries: used,
        })
    }

    async fn machine_translate(&self, text: &str) -> Result<String, TranslationError> {
        let translator = self
            .translator
            .as_ref()
            .ok_or(TranslationError::Unavailable)?;

        tracing::info!("Translating with Cloud Translation");
        translator.translate(text).await.map_err(|e| {
            tracing::error!(error = %e, "Cloud translation failed");
            TranslationError::Failed(e)
        })
    }
}

/// First enabled keyword prompt whose key occurs in the English source
fn match_keyword_prompt<'a>(
    snapshot: &'a StoreSnapshot,
    original_english: &str,
) -> Option<(&'a str, &'a PromptEntry)> {
    let english = original_english.to_lowercase();
    snapshot
        .dictionaries
        .gemini_keyword_prompts
        .iter()
        .find(|(key, entry)| {
            entry.enabled && !key.is_empty() && english.contains(&key.to_lowercase())
        })
        .map(|(key, entry)| (key.as_str(), entry))
}
