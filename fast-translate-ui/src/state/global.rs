//! Global Application State
//!
//! Reactive state using Leptos signals, plus the browser implementations of
//! the controller's [`View`] and [`Runtime`] seams.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api::HttpBackend;
use crate::controller::{LocalTask, Message, Runtime, View, ViewController};
use crate::model::{DictionaryCategory, DictionaryCollection, EntryDraft, Settings};
use crate::render::UsedLine;

/// Controller wired to the browser
pub type AppController = ViewController<HttpBackend, LeptosView, BrowserRuntime>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Last fetched dictionaries
    pub dictionaries: RwSignal<DictionaryCollection>,
    /// General prompt editor contents
    pub general_prompt: RwSignal<String>,
    pub ai_mode: RwSignal<bool>,
    pub fire_mode: RwSignal<bool>,
    /// Translation input text
    pub input: RwSignal<String>,
    /// Plain text panel
    pub plain_output: RwSignal<String>,
    /// Markup panel HTML
    pub markup_output: RwSignal<String>,
    /// `None` until the first translation completes
    pub used_lines: RwSignal<Option<Vec<UsedLine>>>,
    pub settings: RwSignal<Settings>,
    pub api_key_input: RwSignal<String>,
    pub model_name_input: RwSignal<String>,
    pub word_replacement_form: EntryFormState,
    pub keyword_based_form: EntryFormState,
    pub single_word_form: EntryFormState,
    pub prompt_form: EntryFormState,
    /// Single message slot
    pub message: RwSignal<Option<Message>>,
}

/// Input fields of one dictionary's entry form
#[derive(Clone, Copy)]
pub struct EntryFormState {
    pub key: RwSignal<String>,
    /// Value, original word, or prompt text
    pub first: RwSignal<String>,
    /// Replacement (keyword entries only)
    pub second: RwSignal<String>,
}

impl EntryFormState {
    fn new() -> Self {
        Self {
            key: create_rw_signal(String::new()),
            first: create_rw_signal(String::new()),
            second: create_rw_signal(String::new()),
        }
    }

    pub fn clear(&self) {
        self.key.set(String::new());
        self.first.set(String::new());
        self.second.set(String::new());
    }

    pub fn draft(&self, category: DictionaryCategory) -> EntryDraft {
        EntryDraft::from_fields(
            category,
            self.key.get_untracked(),
            self.first.get_untracked(),
            self.second.get_untracked(),
        )
    }
}

impl GlobalState {
    fn new() -> Self {
        Self {
            dictionaries: create_rw_signal(DictionaryCollection::default()),
            general_prompt: create_rw_signal(String::new()),
            ai_mode: create_rw_signal(false),
            fire_mode: create_rw_signal(false),
            input: create_rw_signal(String::new()),
            plain_output: create_rw_signal(String::new()),
            markup_output: create_rw_signal(String::new()),
            used_lines: create_rw_signal(None),
            settings: create_rw_signal(Settings::default()),
            api_key_input: create_rw_signal(String::new()),
            model_name_input: create_rw_signal(String::new()),
            word_replacement_form: EntryFormState::new(),
            keyword_based_form: EntryFormState::new(),
            single_word_form: EntryFormState::new(),
            prompt_form: EntryFormState::new(),
            message: create_rw_signal(None),
        }
    }

    pub fn form(&self, category: DictionaryCategory) -> EntryFormState {
        match category {
            DictionaryCategory::WordReplacement => self.word_replacement_form,
            DictionaryCategory::KeywordBased => self.keyword_based_form,
            DictionaryCategory::SingleWord => self.single_word_form,
            DictionaryCategory::GeminiKeywordPrompts => self.prompt_form,
        }
    }
}

/// Provide global state and the controller to the component tree
pub fn provide_global_state() -> Rc<AppController> {
    let state = GlobalState::new();
    provide_context(state);

    let controller = ViewController::new(HttpBackend, LeptosView { state }, BrowserRuntime);
    provide_context(controller.clone());
    controller
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

pub fn use_controller() -> Rc<AppController> {
    use_context::<Rc<AppController>>().expect("AppController not found")
}

// ============================================
// View
// ============================================

/// Renders by writing signals
pub struct LeptosView {
    state: GlobalState,
}

#[async_trait(?Send)]
impl View for LeptosView {
    fn render_dictionaries(&self, dictionaries: &DictionaryCollection) {
        self.state.dictionaries.set(dictionaries.clone());
    }

    fn render_general_prompt(&self, prompt: &str) {
        self.state.general_prompt.set(prompt.to_string());
    }

    fn render_ai_mode(&self, enabled: bool) {
        self.state.ai_mode.set(enabled);
    }

    fn render_fire_mode(&self, enabled: bool) {
        self.state.fire_mode.set(enabled);
    }

    fn render_translation(&self, plain: &str, markup: &str) {
        self.state.plain_output.set(plain.to_string());
        self.state.markup_output.set(markup.to_string());
    }

    fn render_used_dictionaries(&self, lines: &[UsedLine]) {
        self.state.used_lines.set(Some(lines.to_vec()));
    }

    /// Replaces the option lists and restores both current-value fields
    fn render_settings(&self, settings: &Settings) {
        self.state.settings.set(settings.clone());
        self.state.api_key_input.set(settings.current_api_key.clone());
        self.state.model_name_input.set(settings.current_model_name.clone());
    }

    fn clear_entry_form(&self, category: DictionaryCategory) {
        self.state.form(category).clear();
    }

    fn show_message(&self, message: Option<&Message>) {
        self.state.message.set(message.cloned());
    }

    fn confirm(&self, question: &str) -> bool {
        window().confirm_with_message(question).unwrap_or(false)
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), String> {
        // navigator.clipboard.writeText(text)
        let navigator = window().navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| "Clipboard API unavailable".to_string())?;
        if clipboard.is_undefined() {
            return Err("Clipboard API unavailable".to_string());
        }

        let write_text: js_sys::Function =
            js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .map_err(|_| "Clipboard API unavailable".to_string())?
                .dyn_into()
                .map_err(|_| "Clipboard API unavailable".to_string())?;

        let promise: js_sys::Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| format!("{:?}", e))?
            .dyn_into()
            .map_err(|_| "Clipboard write did not return a promise".to_string())?;

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    fn copy_with_selection(&self, text: &str) -> Result<(), String> {
        let document = document();
        let body = document.body().ok_or("Document has no body")?;

        let textarea: web_sys::HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|_| "Failed to create textarea".to_string())?
            .dyn_into()
            .map_err(|_| "Failed to create textarea".to_string())?;
        textarea.set_value(text);

        body.append_child(&textarea)
            .map_err(|_| "Failed to attach textarea".to_string())?;
        textarea.select();

        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .ok_or("Document does not support execCommand")
            .and_then(|html| html.exec_command("copy").map_err(|_| "Copy command failed"));
        textarea.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err("Copy command was rejected".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

// ============================================
// Runtime
// ============================================

/// gloo timers and `spawn_local`
#[derive(Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    type Timer = Timeout;

    fn delay(&self, ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(ms, callback)
    }

    fn detach(&self, ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(ms, callback).forget();
    }

    fn spawn(&self, task: LocalTask) {
        spawn_local(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settings_restores_current_fields() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.api_key_input.set("typed but unsaved".to_string());

        let view = LeptosView { state };
        view.render_settings(&Settings {
            api_keys: vec!["k1".to_string(), "k0".to_string()],
            model_names: vec!["m1".to_string()],
            current_api_key: "k1".to_string(),
            current_model_name: "m1".to_string(),
        });

        assert_eq!(state.api_key_input.get_untracked(), "k1");
        assert_eq!(state.model_name_input.get_untracked(), "m1");
        assert_eq!(state.settings.get_untracked().api_keys.len(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_clear_entry_form_empties_only_that_category() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.keyword_based_form.key.set("court".to_string());
        state.single_word_form.key.set("dog".to_string());

        let view = LeptosView { state };
        view.clear_entry_form(DictionaryCategory::KeywordBased);

        assert_eq!(state.keyword_based_form.key.get_untracked(), "");
        assert_eq!(state.single_word_form.key.get_untracked(), "dog");

        runtime.dispose();
    }
}
