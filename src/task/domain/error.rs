//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task detail is empty after trimming.
    #[error("task detail must not be empty")]
    EmptyDetail,

    /// The attached image has no file name.
    #[error("image file name must not be empty")]
    EmptyImageFileName,
}

/// Error returned while parsing task identifiers from user input.
#[derive(Debug, Error)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(#[from] pub uuid::Error);
