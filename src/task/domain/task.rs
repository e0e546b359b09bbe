//! Task row aggregate and its validated insert payload.

use super::{TaskDetail, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated payload for a task row that has not been persisted yet.
///
/// Identifiers and timestamps are assigned by the repository at insert
/// time, so a `NewTask` carries only the caller-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    detail: TaskDetail,
    image_url: Option<String>,
    is_completed: bool,
}

impl NewTask {
    /// Creates a validated insert payload without an image.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDetail`] when either field is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        is_completed: bool,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            detail: TaskDetail::new(detail)?,
            image_url: None,
            is_completed,
        })
    }

    /// Attaches the public URL of an already-uploaded image.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task detail.
    #[must_use]
    pub const fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    /// Returns the public image URL, if an image was uploaded.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }
}

/// Parameter object for reconstructing a persisted task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted task detail.
    pub detail: TaskDetail,
    /// Persisted public image URL, if any.
    pub image_url: Option<String>,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted edit timestamp; absent until an edit occurs.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A persisted task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    detail: TaskDetail,
    image_url: Option<String>,
    is_completed: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            detail: data.detail,
            image_url: data.image_url,
            is_completed: data.is_completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Builds the persisted row for a freshly inserted payload.
    ///
    /// Used by repositories that assign identifiers and timestamps
    /// themselves; a new row never carries an edit timestamp.
    #[must_use]
    pub fn from_new(payload: NewTask, id: TaskId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            detail: payload.detail,
            image_url: payload.image_url,
            is_completed: payload.is_completed,
            created_at,
            updated_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task detail.
    #[must_use]
    pub const fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    /// Returns the public image URL, if the task has an image.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the edit timestamp; absent until an edit occurs.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
