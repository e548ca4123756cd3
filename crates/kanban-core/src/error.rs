//! Error Types
//!
//! None of these are fatal: the UI recovers from each locally.

use thiserror::Error;

/// Common result type for board operations
pub type KanbanResult<T> = Result<T, KanbanError>;

/// Board-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KanbanError {
    /// A required field was blank
    #[error("Invalid input: {0}")]
    Validation(String),
    /// An operation referenced a board or task that no longer exists
    #[error("Not found: {0}")]
    NotFound(String),
    /// The persisted snapshot could not be parsed
    #[error("Corrupt snapshot: {0}")]
    Deserialization(String),
    /// No id is left above the largest one in use
    #[error("Id space exhausted after {0}")]
    IdExhausted(String),
    /// The key-value store refused a write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KanbanError {
    pub fn is_validation(&self) -> bool {
        matches!(self, KanbanError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KanbanError::NotFound(_))
    }
}
