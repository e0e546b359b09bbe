//! Wire row models for the task table.
//!
//! Field names follow the hosted schema, including its `update_at`
//! spelling for the edit timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Columns selected on every fetch.
pub(crate) const TASK_COLUMNS: &str =
    "id,created_at,title,detail,image_url,is_completed,update_at";

/// Query result row for task records.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaskRow {
    /// Server-assigned row identifier.
    pub id: Uuid,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Task title.
    pub title: String,
    /// Task detail text.
    pub detail: String,
    /// Public image URL. Historic rows may carry `""` for "no image".
    #[serde(default)]
    pub image_url: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Edit timestamp; null until an edit occurs.
    #[serde(default)]
    pub update_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
///
/// Identifier and creation timestamp are server-assigned; an absent image
/// omits the column so the schema default applies.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task detail text.
    pub detail: String,
    /// Public image URL of the uploaded image, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
}
