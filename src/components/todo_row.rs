//! Todo Row Component
//!
//! One draggable row: check icon, text and delete icon.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_pointerdown, DndSignals};

use crate::store::{store_delete_todo, store_toggle_todo, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoRow(
    id: u32,
    /// Row index in the filtered view
    index: Memo<usize>,
    dnd: DndSignals,
) -> impl IntoView {
    let store = use_app_store();
    // Hidden after the first click on the row; never stored in the model
    let (show_delete, set_show_delete) = signal(true);

    let item = Memo::new(move |_| store.todos().read().get(id).cloned());
    let completed = move || item.get().is_some_and(|i| i.completed);
    let text = move || item.get().map(|i| i.text).unwrap_or_default();

    let on_pointerdown = make_on_pointerdown(dnd, index.into());
    let row_class = move || {
        if dnd.dragging_index() == Some(index.get()) {
            "todo-row dragging"
        } else {
            "todo-row"
        }
    };

    view! {
        <div class=row_class on:pointerdown=on_pointerdown>
            <div
                class="todo"
                on:click=move |_| {
                    if !dnd.suppress_click() {
                        set_show_delete.set(false);
                    }
                }
            >
                <div
                    class=move || if completed() { "check-icon completed" } else { "check-icon" }
                    on:click=move |_| {
                        if !dnd.suppress_click() {
                            store_toggle_todo(&store, id);
                        }
                    }
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="14" height="11">
                        <path fill="none" stroke="#FFF" stroke-width="2" d="M1 4.304L3.696 7 9 1" />
                    </svg>
                </div>
                <span style=move || {
                    if completed() { "text-decoration: line-through;" } else { "text-decoration: none;" }
                }>
                    {text}
                </span>
                <Show when=move || show_delete.get()>
                    <div
                        class="delete-icon"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            if !dnd.suppress_click() {
                                store_delete_todo(&store, id);
                            }
                        }
                    >
                        "×"
                    </div>
                </Show>
            </div>
        </div>
    }
}
