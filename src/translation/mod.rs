//! Translation
//!
//! - **provider**: the `TextGenerator` / `MachineTranslator` seams
//! - **gemini**: Gemini `generateContent` client
//! - **cloud**: Google Cloud Translation v3 client
//! - **engine**: mode selection (AI mode, keyword prompts, machine
//!   translation) followed by dictionary application

mod cloud;
mod engine;
mod gemini;
mod provider;

pub use cloud::{CloudTranslateClient, CloudTranslateConfig};
pub use engine::{TranslationEngine, TranslationError, TranslationOutcome};
pub use gemini::{GeminiClient, GeminiConfig};
pub use provider::{GenerationRequest, MachineTranslator, ProviderError, TextGenerator};
