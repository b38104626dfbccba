//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All list mutations from the UI go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{filter, FilterMode, TodoList};

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The ordered todo collection
    pub todos: TodoList,
    /// Active filter
    pub filter: FilterMode,
    /// Theme flag, presentation only
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(filter: FilterMode, dark_mode: bool) -> Self {
        Self {
            filter,
            dark_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a todo; false when the text was blank
pub fn store_add_todo(store: &AppStore, text: &str) -> bool {
    match store.todos().write().add(text) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("[STORE] add ignored: {}", e);
            false
        }
    }
}

pub fn store_toggle_todo(store: &AppStore, id: u32) {
    if let Err(e) = store.todos().write().toggle_complete(id) {
        log::debug!("[STORE] toggle ignored: {}", e);
    }
}

pub fn store_delete_todo(store: &AppStore, id: u32) {
    if let Err(e) = store.todos().write().delete(id) {
        log::debug!("[STORE] delete ignored: {}", e);
    }
}

pub fn store_clear_completed(store: &AppStore) {
    let _ = store.todos().write().clear_completed();
}

/// Move between rows of the current filtered view
pub fn store_move_visible(store: &AppStore, from: usize, to: usize) -> bool {
    let mode = store.filter().get_untracked();
    match store.todos().write().move_visible(mode, from, to) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("[STORE] move ignored: {}", e);
            false
        }
    }
}

pub fn store_set_filter(store: &AppStore, mode: FilterMode) {
    *store.filter().write() = mode;
}

pub fn store_toggle_dark_mode(store: &AppStore) {
    let binding = store.dark_mode();
    let mut dark = binding.write();
    *dark = !*dark;
}

/// Ids of the visible rows, in display order (tracked)
pub fn store_visible_ids(store: &AppStore) -> Vec<u32> {
    let mode = store.filter().get();
    let todos = store.todos().read();
    let ids = filter(todos.items(), mode).into_iter().map(|item| item.id).collect();
    ids
}
