//! Settings Components
//!
//! Gemini credentials and model selection, plus the server URL override.

use leptos::*;

use super::INPUT_CLASS;
use crate::api;
use crate::state::{use_controller, use_global_state};

/// API key and model name, with previously used values as suggestions
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let state = use_global_state();
    let controller = use_controller();

    let load = {
        let controller = controller.clone();
        move |_| controller.spawn(|c| async move { c.load_settings().await })
    };

    let save = move |_| {
        let api_key = state.api_key_input.get_untracked();
        let model_name = state.model_name_input.get_untracked();
        controller.spawn(move |c| async move { c.save_settings(&api_key, &model_name).await });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Gemini Settings"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"API Key"</label>
                    <input
                        type="text"
                        list="api-key-options"
                        placeholder=move || state.settings.get().current_api_key
                        prop:value=move || state.api_key_input.get()
                        on:input=move |ev| state.api_key_input.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                    <datalist id="api-key-options">
                        {move || state.settings.get().api_keys.into_iter()
                            .map(|key| view! { <option value=key /> })
                            .collect_view()}
                    </datalist>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Model Name"</label>
                    <input
                        type="text"
                        list="model-name-options"
                        placeholder=move || state.settings.get().current_model_name
                        prop:value=move || state.model_name_input.get()
                        on:input=move |ev| state.model_name_input.set(event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                    <datalist id="model-name-options">
                        {move || state.settings.get().model_names.into_iter()
                            .map(|model| view! { <option value=model /> })
                            .collect_view()}
                    </datalist>
                </div>

                <div class="text-sm text-gray-400">
                    "Current model: "
                    <span class="text-white">{move || state.settings.get().current_model_name}</span>
                </div>

                <div class="flex space-x-2">
                    <button
                        on:click=save
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Save Settings"
                    </button>
                    <button
                        on:click=load
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Load Settings"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Server URL override kept in local storage
#[component]
pub fn ServerConnection() -> impl IntoView {
    let controller = use_controller();

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);
        api::set_api_base(&api_url.get_untracked());

        spawn_local(async move {
            match api::ping().await {
                Ok(()) => set_test_result.set(Some(true)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Ping failed: {}", e).into());
                    set_test_result.set(Some(false));
                }
            }
            set_testing.set(false);
        });
    };

    // Reload everything from the new server
    let save_url = move |_| {
        api::set_api_base(&api_url.get_untracked());
        controller.start();
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Server"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "API URL (empty for this site)"
                    </label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || match test_result.get() {
                        Some(true) => view! { <span class="text-green-400">"✓ Connected"</span> }.into_view(),
                        Some(false) => view! { <span class="text-red-400">"✕ Failed"</span> }.into_view(),
                        None => view! { <span class="text-gray-400">"Not tested"</span> }.into_view(),
                    }}
                </div>
            </div>
        </section>
    }
}
