//! Dictionary List Component
//!
//! Rows of one category with toggle and delete actions. The list is
//! rebuilt from the latest fetched collection on every change.

use leptos::*;

use crate::model::DictionaryCategory;
use crate::render::{entry_rows, EntryRow};
use crate::state::{use_controller, use_global_state};

#[component]
pub fn DictionaryList(category: DictionaryCategory) -> impl IntoView {
    let state = use_global_state();

    view! {
        <ul class="divide-y divide-gray-700">
            {move || {
                let rows = entry_rows(&state.dictionaries.get(), category);
                if rows.is_empty() {
                    view! { <li class="py-3 text-gray-500 text-sm">"No entries yet"</li> }.into_view()
                } else {
                    rows.into_iter()
                        .map(|row| view! { <EntryRowView row=row /> })
                        .collect_view()
                }
            }}
        </ul>
    }
}

#[component]
fn EntryRowView(row: EntryRow) -> impl IntoView {
    let controller = use_controller();
    let toggle_label = row.toggle_label();
    let EntryRow {
        category,
        key,
        text,
        enabled,
    } = row;

    let toggle = {
        let controller = controller.clone();
        let key = key.clone();
        move |_| {
            let key = key.clone();
            controller.spawn(move |c| async move { c.toggle_entry(category, &key, !enabled).await });
        }
    };

    let delete = move |_| {
        let key = key.clone();
        controller.spawn(move |c| async move { c.delete_entry(category, &key).await });
    };

    let text_class = if enabled { "flex-1" } else { "flex-1 text-gray-500 line-through" };

    view! {
        <li class="flex items-center gap-3 py-3">
            <span class=text_class>{text}</span>
            <button
                on:click=toggle
                class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
            >
                {toggle_label}
            </button>
            <button
                on:click=delete
                class="px-3 py-1 bg-red-700 hover:bg-red-600 rounded text-sm transition-colors"
            >
                "Delete"
            </button>
        </li>
    }
}
