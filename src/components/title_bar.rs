//! Title Bar Component
//!
//! Heading and theme toggle.

use leptos::prelude::*;

use crate::store::{store_toggle_dark_mode, use_app_store, AppStateStoreFields};

#[component]
pub fn TitleBar(#[prop(into)] title: String) -> impl IntoView {
    let store = use_app_store();
    let is_dark = move || store.dark_mode().get();

    view! {
        <div class="title-container">
            <h1>{title}</h1>
            <button
                class="dark-mode-toggle"
                title=move || if is_dark() { "Light mode" } else { "Dark mode" }
                on:click=move |_| store_toggle_dark_mode(&store)
            >
                {move || if is_dark() { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
