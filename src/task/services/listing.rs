//! Task list view.
//!
//! The view holds the most recently fetched rows and reconciles them
//! locally after a confirmed delete succeeds; it never re-fetches to
//! observe its own writes.

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Marker displayed in place of an image for tasks without one.
pub const IMAGE_PLACEHOLDER: &str = "-";

/// The user's answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    /// The user confirmed the delete.
    Confirmed,
    /// The user declined; nothing must happen.
    Declined,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row was removed and the local view reconciled.
    Deleted,
    /// The user declined; no gateway call was made.
    Declined,
}

/// Errors returned by the list view.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Fetching the task list failed.
    #[error("task list fetch failed: {0}")]
    Fetch(#[source] TaskRepositoryError),

    /// Deleting a task failed; the local view is left untouched.
    #[error("task delete failed: {0}")]
    Delete(#[source] TaskRepositoryError),
}

/// Stateful view over the task table.
#[derive(Clone)]
pub struct TaskListView<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    tasks: Vec<Task>,
}

impl<R> TaskListView<R>
where
    R: TaskRepository,
{
    /// Creates an empty view over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            tasks: Vec::new(),
        }
    }

    /// Fetches all rows, newest first, replacing the local state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Fetch`] when the gateway fetch fails; the
    /// previously loaded rows are kept in that case.
    pub async fn load(&mut self) -> Result<&[Task], TaskListError> {
        let tasks = self
            .repository
            .list_recent_first()
            .await
            .map_err(TaskListError::Fetch)?;
        self.tasks = tasks;
        Ok(&self.tasks)
    }

    /// Returns the rows from the last successful load.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Deletes a row after explicit confirmation.
    ///
    /// A declined confirmation aborts with no gateway call and no state
    /// change. On confirmed success the local view drops exactly the entry
    /// with that id, without a re-fetch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Delete`] when the gateway remove fails;
    /// the local view is left untouched.
    pub async fn delete(
        &mut self,
        id: TaskId,
        confirmation: DeleteConfirmation,
    ) -> Result<DeleteOutcome, TaskListError> {
        if confirmation == DeleteConfirmation::Declined {
            return Ok(DeleteOutcome::Declined);
        }
        self.repository
            .delete(id)
            .await
            .map_err(TaskListError::Delete)?;
        self.tasks.retain(|task| task.id() != id);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Returns what the list renders in the image column: the public URL, or
/// the placeholder marker for tasks without an image.
#[must_use]
pub fn image_marker(task: &Task) -> &str {
    task.image_url().unwrap_or(IMAGE_PLACEHOLDER)
}
