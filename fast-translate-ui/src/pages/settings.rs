//! Settings Page

use leptos::*;

use crate::components::{PromptEditor, ServerConnection, SettingsPanel};

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Gemini credentials, prompt and server"</p>
            </div>

            <SettingsPanel />
            <PromptEditor />
            <ServerConnection />
        </div>
    }
}
