//! Todo Item
//!
//! A single task record. Text is fixed at creation; only the completion
//! flag changes afterwards.

use serde::{Deserialize, Serialize};

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, stable across reorders
    pub id: u32,
    /// Display text
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
