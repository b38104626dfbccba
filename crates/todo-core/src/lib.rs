//! Todo Core
//!
//! Domain layer for the todo widget:
//! - item: the todo record
//! - list: the ordered collection and its mutations
//! - filter: filtered views over the collection
//!
//! No browser dependency, so everything here is tested natively.

mod error;
mod filter;
mod item;
mod list;

pub use error::{TodoError, TodoResult};
pub use filter::{filter, visible_positions, FilterMode};
pub use item::TodoItem;
pub use list::TodoList;
