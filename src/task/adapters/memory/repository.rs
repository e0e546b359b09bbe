//! In-memory task repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Assigns identifiers and creation timestamps at insert time, mirroring
/// the hosted table's server-assigned columns.
#[derive(Debug)]
pub struct InMemoryTaskRepository<C = DefaultClock> {
    state: Arc<RwLock<Vec<Task>>>,
    clock: Arc<C>,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository stamping rows with the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn list_recent_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks = state.clone();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    async fn insert(&self, payload: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let task = Task::from_new(payload, TaskId::new(), self.clock.utc());
        state.push(task.clone());
        Ok(task)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        // Removing an absent id is a no-op, keeping deletes idempotent.
        state.retain(|task| task.id() != id);
        Ok(())
    }
}
