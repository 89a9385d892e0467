//! Toast Notification Component
//!
//! Shows the message slot. The controller replaces and expires it.

use leptos::*;

use crate::controller::MessageKind;
use crate::state::use_global_state;

/// Message slot position: top of the page, below the navigation bar
const TOAST_CONTAINER_CLASS: &str = "fixed top-20 left-1/2 -translate-x-1/2 z-50";

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class=TOAST_CONTAINER_CLASS>
            {move || {
                state.message.get().map(|message| view! {
                    <ToastMessage text=message.text kind=message.kind />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    text: String,
    kind: MessageKind,
) -> impl IntoView {
    let (icon, bg_class) = match kind {
        MessageKind::Success => ("✓", "bg-green-600"),
        MessageKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{text}</span>
        </div>
    }
}
