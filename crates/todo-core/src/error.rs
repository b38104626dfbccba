//! Domain Errors
//!
//! Every failing operation leaves the list exactly as it was; the widget
//! treats these as silent no-ops and only logs them.

use thiserror::Error;

/// Common result type for list operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Why a list operation was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Text was empty after trimming
    #[error("Invalid input: todo text is empty")]
    InvalidInput,
    /// No item carries this id
    #[error("Not found: todo #{0}")]
    NotFound(u32),
    /// Index outside `0..len`
    #[error("Out of range: index {index} with {len} items")]
    OutOfRange { index: usize, len: usize },
    /// Every id has been handed out
    #[error("Ids exhausted: cannot allocate another todo id")]
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TodoError::NotFound(7).to_string(), "Not found: todo #7");
        assert_eq!(
            TodoError::OutOfRange { index: 4, len: 3 }.to_string(),
            "Out of range: index 4 with 3 items"
        );
    }
}
