//! Task creation workflow.
//!
//! Side effects are strictly ordered: validate, then upload and resolve
//! the public URL when an image is attached, then insert the row. No step
//! is retried, and a failed step aborts everything after it.

use crate::task::{
    domain::{ImageUpload, NewTask, StorageKey, Task, TaskDomainError},
    ports::{ObjectStore, ObjectStoreError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Submission payload collected from the create-task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    detail: String,
    image: Option<ImageUpload>,
    is_completed: bool,
}

impl CreateTaskRequest {
    /// Creates a request with the two required text fields.
    ///
    /// The completion flag defaults to `false`.
    #[must_use]
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            image: None,
            is_completed: false,
        }
    }

    /// Attaches an image to upload before the insert.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Errors returned by the creation workflow.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// A required field failed validation; no gateway call was made.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The image upload failed; no row was inserted.
    #[error("image upload failed: {0}")]
    Upload(#[from] ObjectStoreError),

    /// The row insert failed. An already-uploaded image stays orphaned in
    /// the bucket; no compensating delete is attempted.
    #[error("task insert failed: {0}")]
    Persistence(#[from] TaskRepositoryError),
}

/// Result type for the creation workflow.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation workflow service.
#[derive(Clone)]
pub struct TaskCreationService<R, S, C>
where
    R: TaskRepository,
    S: ObjectStore,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<R, S, C> TaskCreationService<R, S, C>
where
    R: TaskRepository,
    S: ObjectStore,
    C: Clock + Send + Sync,
{
    /// Creates a new creation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            repository,
            store,
            clock,
        }
    }

    /// Validates the submission, uploads the attached image if any, and
    /// inserts the task row.
    ///
    /// Returns the persisted row with its server-assigned identifier and
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Validation`] before any gateway call
    /// when a required field is blank, [`TaskCreationError::Upload`] when
    /// the image upload fails (no row is inserted), or
    /// [`TaskCreationError::Persistence`] when the insert fails.
    pub async fn submit(&self, request: CreateTaskRequest) -> TaskCreationResult<Task> {
        let payload = NewTask::new(request.title, request.detail, request.is_completed)?;

        let payload = match request.image {
            Some(image) => {
                let key = StorageKey::derive(image.file_name(), &*self.clock);
                let (content_type, bytes) = image.into_payload();
                self.store.put(&key, bytes, &content_type).await?;
                // URL resolution is local; the object is already durable.
                payload.with_image_url(self.store.public_url(&key))
            }
            None => payload,
        };

        Ok(self.repository.insert(payload).await?)
    }
}
