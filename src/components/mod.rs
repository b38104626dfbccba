//! UI Components
//!
//! Thin Leptos views over the store and the drag resolver.

mod filter_bar;
mod title_bar;
mod todo_form;
mod todo_list_view;
mod todo_row;

pub use filter_bar::FilterBar;
pub use title_bar::TitleBar;
pub use todo_form::TodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
