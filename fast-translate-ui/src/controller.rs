//! View Controller
//!
//! Everything the page does lives here, independent of Leptos and the
//! browser. The controller talks to three seams:
//!
//! - [`Backend`]: the HTTP API
//! - [`View`]: rendering, confirmation dialogs and the clipboard
//! - [`Runtime`]: timers and task spawning
//!
//! Control flow is request, response, full re-render. Every mutation
//! refetches the whole dictionary collection instead of patching it.
//! State sits in a `RefCell` that is never borrowed across an `.await`
//! or while calling into the view.

use async_trait::async_trait;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};

use crate::model::{DictionaryCategory, DictionaryCollection, EntryDraft, Settings, TranslationResult};
use crate::render::{escape_html, strip_tags, used_lines, UsedLine};

/// Fire-mode debounce delay
pub const DEBOUNCE_MS: u32 = 500;

/// How long a message stays visible
pub const MESSAGE_TTL_MS: u32 = 5_000;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this entry?";

const PENDING_TEXT: &str = "Translating...";
const PENDING_MARKUP: &str = r#"<div class="loading">Translating...</div>"#;

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// HTTP API used by the controller
#[async_trait(?Send)]
pub trait Backend {
    async fn fetch_dictionaries(&self) -> Result<DictionaryCollection, String>;
    async fn fetch_general_prompt(&self) -> Result<String, String>;
    async fn fetch_ai_mode(&self) -> Result<bool, String>;

    /// Errors carry the server's `detail` when it sent one
    async fn translate(&self, text: &str) -> Result<TranslationResult, String>;

    async fn update_entry(
        &self,
        category: DictionaryCategory,
        key: &str,
        value: &str,
    ) -> Result<(), String>;
    async fn delete_entry(&self, category: DictionaryCategory, key: &str) -> Result<(), String>;
    async fn toggle_entry(
        &self,
        category: DictionaryCategory,
        key: &str,
        enabled: bool,
    ) -> Result<(), String>;

    async fn set_ai_mode(&self, enabled: bool) -> Result<(), String>;
    async fn save_settings(
        &self,
        api_key: Option<&str>,
        model_name: Option<&str>,
    ) -> Result<(), String>;
    async fn load_settings(&self) -> Result<Settings, String>;
    async fn save_general_prompt(&self, prompt: &str) -> Result<(), String>;
}

/// Rendering sink plus the few browser interactions the controller needs
#[async_trait(?Send)]
pub trait View {
    fn render_dictionaries(&self, dictionaries: &DictionaryCollection);
    fn render_general_prompt(&self, prompt: &str);
    fn render_ai_mode(&self, enabled: bool);
    fn render_fire_mode(&self, enabled: bool);
    /// Plain panel text and markup panel HTML
    fn render_translation(&self, plain: &str, markup: &str);
    fn render_used_dictionaries(&self, lines: &[UsedLine]);
    fn render_settings(&self, settings: &Settings);
    fn clear_entry_form(&self, category: DictionaryCategory);
    /// Replace the message slot; `None` empties it
    fn show_message(&self, message: Option<&Message>);
    fn confirm(&self, question: &str) -> bool;

    /// Async clipboard API
    async fn write_clipboard(&self, text: &str) -> Result<(), String>;
    /// Temporary textarea plus `execCommand("copy")`
    fn copy_with_selection(&self, text: &str) -> Result<(), String>;
}

/// Timers and task spawning
pub trait Runtime {
    /// Pending timer; dropping it cancels the callback
    type Timer: 'static;

    fn delay(&self, ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
    /// Run `callback` after `ms` with no way to cancel it
    fn detach(&self, ms: u32, callback: Box<dyn FnOnce()>);
    fn spawn(&self, task: LocalTask);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient notification
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub kind: MessageKind,
}

struct ControllerState<T> {
    input: String,
    fire_mode: bool,
    ai_mode: bool,
    dictionaries: DictionaryCollection,
    /// HTML currently in the markup panel
    markup: String,
    /// Id of the visible message
    message: Option<u64>,
    next_message_id: u64,
    debounce: Option<T>,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            fire_mode: false,
            ai_mode: false,
            dictionaries: DictionaryCollection::default(),
            markup: String::new(),
            message: None,
            next_message_id: 0,
            debounce: None,
        }
    }
}

pub struct ViewController<B, V, R: Runtime> {
    backend: B,
    view: V,
    runtime: R,
    state: RefCell<ControllerState<R::Timer>>,
    this: Weak<Self>,
}

impl<B, V, R> ViewController<B, V, R>
where
    B: Backend + 'static,
    V: View + 'static,
    R: Runtime + 'static,
{
    pub fn new(backend: B, view: V, runtime: R) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            backend,
            view,
            runtime,
            state: RefCell::new(ControllerState::default()),
            this: this.clone(),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn fire_mode(&self) -> bool {
        self.state.borrow().fire_mode
    }

    pub fn ai_mode(&self) -> bool {
        self.state.borrow().ai_mode
    }

    /// Last fetched dictionary snapshot
    pub fn dictionaries(&self) -> DictionaryCollection {
        self.state.borrow().dictionaries.clone()
    }

    /// Run an operation on the runtime's task queue
    pub fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Rc<Self>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(this) = self.this.upgrade() {
            self.runtime.spawn(Box::pin(operation(this)));
        }
    }

    /// Initial load: dictionaries, prompt and AI mode in sequence, settings
    /// independently.
    pub fn start(&self) {
        self.spawn(|c| async move { c.fetch_initial_state().await });
        self.spawn(|c| async move { c.load_settings().await });
    }

    pub async fn fetch_initial_state(&self) {
        let loaded = async {
            let dictionaries = self.backend.fetch_dictionaries().await?;
            let prompt = self.backend.fetch_general_prompt().await?;
            let ai_mode = self.backend.fetch_ai_mode().await?;
            Ok::<_, String>((dictionaries, prompt, ai_mode))
        }
        .await;

        match loaded {
            Ok((dictionaries, prompt, ai_mode)) => {
                self.view.render_general_prompt(&prompt);
                self.state.borrow_mut().ai_mode = ai_mode;
                self.view.render_ai_mode(ai_mode);
                self.replace_dictionaries(dictionaries);
            }
            Err(e) => self.notify_error(format!("Error fetching dictionaries: {}", e)),
        }
    }

    async fn refresh_dictionaries(&self) {
        match self.backend.fetch_dictionaries().await {
            Ok(dictionaries) => self.replace_dictionaries(dictionaries),
            Err(e) => self.notify_error(format!("Error fetching dictionaries: {}", e)),
        }
    }

    fn replace_dictionaries(&self, dictionaries: DictionaryCollection) {
        self.state.borrow_mut().dictionaries = dictionaries.clone();
        self.view.render_dictionaries(&dictionaries);
    }

    // ============================================
    // Translation
    // ============================================

    /// Record the input text; in fire mode, (re)arm the debounce timer
    pub fn input_changed(&self, text: String) {
        let fire_mode = {
            let mut state = self.state.borrow_mut();
            state.input = text;
            state.fire_mode
        };
        if !fire_mode {
            return;
        }

        let this = self.this.clone();
        let timer = self.runtime.delay(
            DEBOUNCE_MS,
            Box::new(move || {
                if let Some(c) = this.upgrade() {
                    c.spawn(|c| async move { c.translate().await });
                }
            }),
        );

        // the replaced timer is cancelled on drop
        let previous = self.state.borrow_mut().debounce.replace(timer);
        drop(previous);
    }

    /// Manual trigger; leaves any pending debounce in place
    pub fn translate_now(&self) {
        self.spawn(|c| async move { c.translate().await });
    }

    pub fn toggle_fire_mode(&self) {
        let enabled = {
            let mut state = self.state.borrow_mut();
            state.fire_mode = !state.fire_mode;
            state.fire_mode
        };
        self.view.render_fire_mode(enabled);
    }

    pub async fn translate(&self) {
        let text = self.state.borrow().input.trim().to_string();
        if text.is_empty() {
            self.notify_error("Please enter text to translate");
            return;
        }

        self.show_panels(PENDING_TEXT, PENDING_MARKUP);

        match self.backend.translate(&text).await {
            Ok(result) => {
                let plain = strip_tags(&result.translation);
                self.show_panels(&plain, &result.translation);
                self.view
                    .render_used_dictionaries(&used_lines(&result.used_dictionaries));
                self.notify_success("Translation completed successfully!");
            }
            Err(e) => {
                let markup = format!(r#"<div class="error">Error: {}</div>"#, escape_html(&e));
                self.show_panels("", &markup);
                self.notify_error(format!("Translation error: {}", e));
            }
        }
    }

    fn show_panels(&self, plain: &str, markup: &str) {
        self.state.borrow_mut().markup = markup.to_string();
        self.view.render_translation(plain, markup);
    }

    pub async fn toggle_ai_mode(&self) {
        let enabled = !self.state.borrow().ai_mode;

        match self.backend.set_ai_mode(enabled).await {
            Ok(()) => {
                self.state.borrow_mut().ai_mode = enabled;
                self.view.render_ai_mode(enabled);
                self.notify_success(if enabled {
                    "AI Mode enabled"
                } else {
                    "AI Mode disabled"
                });
            }
            Err(e) => self.notify_error(format!("Error toggling AI mode: {}", e)),
        }
    }

    /// Copy the markup panel's visible text
    pub async fn copy_translation(&self) {
        let text = strip_tags(&self.state.borrow().markup);
        if text.trim().is_empty() {
            self.notify_error("No translation to copy");
            return;
        }

        if self.view.write_clipboard(&text).await.is_err() {
            if let Err(e) = self.view.copy_with_selection(&text) {
                self.notify_error(format!("Error copying translation: {}", e));
                return;
            }
        }
        self.notify_success("Translation copied to clipboard!");
    }

    // ============================================
    // Dictionary mutations
    // ============================================

    pub async fn update_entry(&self, draft: EntryDraft) {
        if !draft.is_complete() {
            self.notify_error("Please fill in all fields");
            return;
        }

        let category = draft.category();
        let result = self
            .backend
            .update_entry(category, draft.key(), &draft.encoded_value())
            .await;

        match result {
            Ok(()) => {
                self.notify_success("Dictionary updated successfully!");
                self.view.clear_entry_form(category);
                self.refresh_dictionaries().await;
            }
            Err(e) => self.notify_error(format!("Error updating dictionary: {}", e)),
        }
    }

    pub async fn delete_entry(&self, category: DictionaryCategory, key: &str) {
        if !self.view.confirm(DELETE_CONFIRMATION) {
            return;
        }

        match self.backend.delete_entry(category, key).await {
            Ok(()) => {
                self.notify_success("Entry deleted successfully!");
                self.refresh_dictionaries().await;
            }
            Err(e) => self.notify_error(format!("Error deleting entry: {}", e)),
        }
    }

    pub async fn toggle_entry(&self, category: DictionaryCategory, key: &str, enabled: bool) {
        match self.backend.toggle_entry(category, key, enabled).await {
            Ok(()) => self.refresh_dictionaries().await,
            Err(e) => self.notify_error(format!("Error toggling entry: {}", e)),
        }
    }

    // ============================================
    // Settings and prompt
    // ============================================

    pub async fn save_settings(&self, api_key: &str, model_name: &str) {
        let api_key = Some(api_key).filter(|k| !k.is_empty());
        let model_name = Some(model_name).filter(|m| !m.is_empty());
        if api_key.is_none() && model_name.is_none() {
            self.notify_error("Please enter at least one setting to save");
            return;
        }

        match self.backend.save_settings(api_key, model_name).await {
            Ok(()) => {
                self.notify_success("Settings saved successfully!");
                self.load_settings().await;
            }
            Err(e) => self.notify_error(format!("Error saving settings: {}", e)),
        }
    }

    pub async fn load_settings(&self) {
        match self.backend.load_settings().await {
            Ok(settings) => self.view.render_settings(&settings),
            Err(e) => self.notify_error(format!("Error loading settings: {}", e)),
        }
    }

    pub async fn save_general_prompt(&self, prompt: &str) {
        match self.backend.save_general_prompt(prompt).await {
            Ok(()) => self.notify_success("General prompt saved successfully!"),
            Err(e) => self.notify_error(format!("Error saving general prompt: {}", e)),
        }
    }

    // ============================================
    // Messages
    // ============================================

    pub fn notify_success(&self, text: impl Into<String>) {
        self.notify(text.into(), MessageKind::Success);
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.notify(text.into(), MessageKind::Error);
    }

    fn notify(&self, text: String, kind: MessageKind) {
        let message = {
            let mut state = self.state.borrow_mut();
            state.next_message_id += 1;
            state.message = Some(state.next_message_id);
            Message {
                id: state.next_message_id,
                text,
                kind,
            }
        };
        self.view.show_message(Some(&message));

        let this = self.this.clone();
        let id = message.id;
        self.runtime.detach(
            MESSAGE_TTL_MS,
            Box::new(move || {
                if let Some(c) = this.upgrade() {
                    c.expire_message(id);
                }
            }),
        );
    }

    /// Clear the slot only if message `id` is still the one shown
    fn expire_message(&self, id: u64) {
        let expired = {
            let mut state = self.state.borrow_mut();
            if state.message == Some(id) {
                state.message = None;
                true
            } else {
                false
            }
        };
        if expired {
            self.view.show_message(None);
        }
    }
}
