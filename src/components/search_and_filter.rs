//! Search and Filter Controls
//!
//! Search input plus type and sort selects. All updates go through the
//! AppContext setters so the page reset happens in one place.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::pipeline::SortKey;

/// Type filter options: (option value, label); empty value = all types
pub const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", "All Types"),
    ("fire", "Fire"),
    ("water", "Water"),
    ("grass", "Grass"),
    ("electric", "Electric"),
    ("ice", "Ice"),
    ("rock", "Rock"),
    ("ground", "Ground"),
    ("psychic", "Psychic"),
    ("dark", "Dark"),
    ("fairy", "Fairy"),
];

/// Sort options: (option value, label); empty value = unsorted
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "Sort By"),
    ("name", "Name"),
    ("attack", "Attack"),
    ("hp", "HP"),
    ("defense", "Defense"),
    ("speed", "Speed"),
];

#[component]
pub fn SearchAndFilter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="controls">
            <input
                type="text"
                class="input-field"
                placeholder="Search Pokémon..."
                prop:value=move || ctx.search_term.get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
            <select
                class="select-field"
                prop:value=move || ctx.selected_type.get()
                on:change=move |ev| ctx.set_type_filter(event_target_value(&ev))
            >
                {TYPE_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
            <select
                class="select-field"
                prop:value=move || ctx.sort_key.get().as_value().to_string()
                on:change=move |ev| ctx.set_sort(SortKey::from_value(&event_target_value(&ev)))
            >
                {SORT_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
