//! General Prompt Editor

use leptos::*;

use super::INPUT_CLASS;
use crate::state::{use_controller, use_global_state};

#[component]
pub fn PromptEditor() -> impl IntoView {
    let state = use_global_state();
    let controller = use_controller();

    let save = move |_| {
        let prompt = state.general_prompt.get_untracked();
        controller.spawn(move |c| async move { c.save_general_prompt(&prompt).await });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-2">"General Prompt"</h2>
            <p class="text-sm text-gray-400 mb-4">
                "Sent with every Gemini translation."
            </p>
            <textarea
                rows="6"
                prop:value=move || state.general_prompt.get()
                on:input=move |ev| state.general_prompt.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
            <button
                on:click=save
                class="mt-3 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Save Prompt"
            </button>
        </section>
    }
}
