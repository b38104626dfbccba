//! Todo Widget App
//!
//! Root component: owns the store for the lifetime of the mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, TitleBar, TodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields};

/// Container class for the current theme
pub fn theme_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "todo-container dark-mode"
    } else {
        "todo-container light-mode"
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.initial_filter(), config.dark_mode));
    provide_context(store);

    view! {
        <div class=move || theme_class(store.dark_mode().get())>
            <TitleBar title=config.title.clone() />
            <TodoForm placeholder=config.placeholder.clone() />
            <TodoListView threshold_px=config.drag_threshold_px />
            <FilterBar />
        </div>
    }
}
