//! UI Components
//!
//! Leptos components rendering the global state and forwarding user
//! actions to the controller.

pub mod dictionary_list;
pub mod entry_form;
pub mod nav;
pub mod prompt_editor;
pub mod settings_panel;
pub mod toast;
pub mod translate_panel;

pub use dictionary_list::DictionaryList;
pub use entry_form::EntryForm;
pub use nav::Nav;
pub use prompt_editor::PromptEditor;
pub use settings_panel::{ServerConnection, SettingsPanel};
pub use toast::Toast;
pub use translate_panel::TranslatePanel;

/// Shared text input styling
pub(crate) const INPUT_CLASS: &str = "w-full bg-gray-700 rounded-lg px-4 py-3 \
     border border-gray-600 focus:border-primary-500 focus:outline-none";
