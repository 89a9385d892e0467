//! Translate Page

use leptos::*;

use crate::components::TranslatePanel;

#[component]
pub fn Translate() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Translate"</h1>
                <p class="text-gray-400 mt-1">"English to Bengali with your dictionaries applied"</p>
            </div>

            <TranslatePanel />
        </div>
    }
}
