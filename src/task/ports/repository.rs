//! Repository port for the task table.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task table contract.
///
/// Implementations persist whole rows; there is no partial update
/// operation because the application has no edit path.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task row ordered by creation time, newest first.
    ///
    /// Rows sharing a creation timestamp have unspecified relative order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the fetch fails.
    async fn list_recent_first(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts a new row and returns it with its assigned identifier and
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the insert fails;
    /// no row is created in that case.
    async fn insert(&self, payload: NewTask) -> TaskRepositoryResult<Task>;

    /// Removes the row with the given identifier.
    ///
    /// Removal is idempotent: deleting an identifier that matches no row
    /// succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the remove fails.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
