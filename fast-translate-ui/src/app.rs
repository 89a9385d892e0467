//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dictionaries, Settings, Translate};
use crate::render::mode_label;
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and controller, then load from the server
    let controller = provide_global_state();
    controller.start();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Translate />
                        <Route path="/dictionaries" view=Dictionaries />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing the active modes and model
#[component]
fn Footer() -> impl IntoView {
    let state = use_global_state();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-4">
                    <span class=move || if state.ai_mode.get() { "text-green-400" } else { "text-gray-400" }>
                        {move || mode_label("AI Mode", state.ai_mode.get())}
                    </span>
                    <span class=move || if state.fire_mode.get() { "text-orange-400" } else { "text-gray-400" }>
                        {move || mode_label("Fire Mode", state.fire_mode.get())}
                    </span>
                </div>

                <div class="text-gray-400">
                    {move || {
                        let model = state.settings.get().current_model_name;
                        if model.is_empty() {
                            "No model selected".to_string()
                        } else {
                            format!("Model: {}", model)
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Translate"
            </A>
        </div>
    }
}
