//! Dictionaries Page
//!
//! One section per category: entry form above the current rows.

use leptos::*;

use crate::components::{DictionaryList, EntryForm};
use crate::model::DictionaryCategory;

#[component]
pub fn Dictionaries() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dictionaries"</h1>
                <p class="text-gray-400 mt-1">"Replacements applied after every translation"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-6">
                {DictionaryCategory::ALL.into_iter().map(|category| view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">{category.title()}</h2>
                        <EntryForm category=category />
                        <DictionaryList category=category />
                    </section>
                }).collect_view()}
            </div>
        </div>
    }
}
