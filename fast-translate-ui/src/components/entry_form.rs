//! Entry Form Component
//!
//! Add or replace an entry in one category. Cleared by the controller
//! after a successful save.

use leptos::*;

use super::INPUT_CLASS;
use crate::model::DictionaryCategory;
use crate::state::{use_controller, use_global_state};

#[component]
pub fn EntryForm(category: DictionaryCategory) -> impl IntoView {
    let form = use_global_state().form(category);
    let controller = use_controller();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = form.draft(category);
        controller.spawn(move |c| async move { c.update_entry(draft).await });
    };

    let fields = match category {
        DictionaryCategory::WordReplacement => view! {
            <TextField placeholder="English word or phrase" value=form.key />
            <TextField placeholder="Bengali replacement" value=form.first />
        }
        .into_view(),
        DictionaryCategory::SingleWord => view! {
            <TextField placeholder="Word" value=form.key />
            <TextField placeholder="Bengali replacement" value=form.first />
        }
        .into_view(),
        DictionaryCategory::KeywordBased => view! {
            <TextField placeholder="English keyword" value=form.key />
            <TextField placeholder="Original Bengali" value=form.first />
            <TextField placeholder="Replacement" value=form.second />
        }
        .into_view(),
        DictionaryCategory::GeminiKeywordPrompts => view! {
            <TextField placeholder="English keyword" value=form.key />
            <textarea
                rows="3"
                placeholder="Prompt sent to Gemini when the keyword appears"
                prop:value=move || form.first.get()
                on:input=move |ev| form.first.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        }
        .into_view(),
    };

    view! {
        <form on:submit=submit class="space-y-2 mb-4">
            {fields}
            <button
                type="submit"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Save Entry"
            </button>
        </form>
    }
}

#[component]
fn TextField(placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            class=INPUT_CLASS
        />
    }
}
