//! Translate Panel
//!
//! Input box, mode toggles, the two output panels and the list of
//! dictionaries used by the last translation.

use leptos::*;

use crate::render::{mode_label, NO_ENTRIES_USED};
use crate::state::{use_controller, use_global_state};

#[component]
pub fn TranslatePanel() -> impl IntoView {
    let state = use_global_state();
    let controller = use_controller();

    let on_input = {
        let controller = controller.clone();
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            state.input.set(text.clone());
            controller.input_changed(text);
        }
    };

    // Ctrl+Enter translates immediately
    let on_keydown = {
        let controller = controller.clone();
        move |ev: ev::KeyboardEvent| {
            if ev.ctrl_key() && ev.key() == "Enter" {
                ev.prevent_default();
                controller.translate_now();
            }
        }
    };

    let translate = {
        let controller = controller.clone();
        move |_| controller.translate_now()
    };

    let toggle_fire = {
        let controller = controller.clone();
        move |_| controller.toggle_fire_mode()
    };

    let toggle_ai = {
        let controller = controller.clone();
        move |_| controller.spawn(|c| async move { c.toggle_ai_mode().await })
    };

    let copy = move |_| controller.spawn(|c| async move { c.copy_translation().await });

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <textarea
                rows="6"
                placeholder="Enter English text (Ctrl+Enter to translate)"
                prop:value=move || state.input.get()
                on:input=on_input
                on:keydown=on_keydown
                class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            />

            <div class="flex flex-wrap gap-2">
                <button
                    on:click=translate
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Translate"
                </button>
                <ModeButton label="Fire Mode" active=state.fire_mode on_click=toggle_fire />
                <ModeButton label="AI Mode" active=state.ai_mode on_click=toggle_ai />
                <button
                    on:click=copy
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                >
                    "Copy"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <h3 class="text-sm text-gray-400 mb-2">"Plain Text"</h3>
                    <div class="bg-gray-900 rounded-lg p-4 min-h-[6rem] whitespace-pre-wrap">
                        {move || state.plain_output.get()}
                    </div>
                </div>
                <div>
                    <h3 class="text-sm text-gray-400 mb-2">"Highlighted"</h3>
                    <div
                        class="bg-gray-900 rounded-lg p-4 min-h-[6rem] whitespace-pre-wrap"
                        prop:innerHTML=move || state.markup_output.get()
                    />
                </div>
            </div>

            <UsedDictionaries />
        </section>
    }
}

#[component]
fn ModeButton<F>(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_click: F,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg font-medium transition-colors";
                if active.get() {
                    format!("{} bg-orange-600 hover:bg-orange-700", base)
                } else {
                    format!("{} bg-gray-700 hover:bg-gray-600 text-gray-300", base)
                }
            }
        >
            {move || mode_label(label, active.get())}
        </button>
    }
}

#[component]
fn UsedDictionaries() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div>
            <h3 class="text-sm text-gray-400 mb-2">"Used Dictionaries"</h3>
            <ul class="space-y-1 text-sm">
                {move || match state.used_lines.get() {
                    None => view! {}.into_view(),
                    Some(lines) if lines.is_empty() => view! {
                        <li class="text-gray-500">{NO_ENTRIES_USED}</li>
                    }.into_view(),
                    Some(lines) => lines.into_iter().map(|line| view! {
                        <li>
                            <strong>{line.label}</strong>
                            " "
                            {line.detail}
                        </li>
                    }).collect_view(),
                }}
            </ul>
        </div>
    }
}
