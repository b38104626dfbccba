//! Filter Bar Component
//!
//! Items-left count, filter buttons and clear-completed.

use leptos::prelude::*;
use todo_core::FilterMode;

use crate::store::{store_clear_completed, store_set_filter, use_app_store, AppStateStoreFields};

/// "1 item left" / "3 items left"
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let items_left = move || items_left_label(store.todos().read().active_count());

    view! {
        <div class="filter-container">
            <span class="items-left">{items_left}</span>
            <div class="filter-buttons">
                {FilterMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    let is_selected = move || store.filter().get() == mode;
                    view! {
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store_set_filter(&store, mode)
                        >
                            {mode.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <button
                class="clear-completed"
                disabled=move || store.todos().read().completed_count() == 0
                on:click=move |_| store_clear_completed(&store)
            >
                "Clear Completed"
            </button>
        </div>
    }
}
