//! Todo List View Component
//!
//! Renders the filtered rows and turns drags into store moves.
//! Drag indices are rows of the filtered view; the store maps them back to
//! collection positions.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TodoRow;
use crate::store::{store_move_visible, store_visible_ids, use_app_store};

#[component]
pub fn TodoListView(threshold_px: i32) -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();

    // Bound once per mount
    let config = DndConfig {
        threshold_px,
        ..DndConfig::default()
    };
    bind_global_pointer_handlers(dnd, config, move |from, to| store_move_visible(&store, from, to));

    let visible_ids = Memo::new(move |_| store_visible_ids(&store));

    view! {
        <div class="todo-list">
            <For
                each=move || visible_ids.get()
                key=|id| *id
                children=move |id| {
                    let index = Memo::new(move |_| {
                        visible_ids.get().iter().position(|v| *v == id).unwrap_or(0)
                    });
                    view! { <TodoRow id=id index=index dnd=dnd /> }
                }
            />
        </div>
    }
}
