//! Todo Form Component
//!
//! Single text input; submitting adds a todo.

use leptos::prelude::*;

use crate::store::{store_add_todo, use_app_store};

#[component]
pub fn TodoForm(#[prop(into)] placeholder: String) -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is ignored by the store and stays in the box
        if store_add_todo(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="form-container" on:submit=add_todo>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
        </form>
    }
}
