//! Domain model for task management.
//!
//! The task domain models the fields a task row carries, the validation
//! applied at creation time, and the storage-key derivation for attached
//! images, while keeping all gateway concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod image;
mod task;
mod text;

pub use error::{ParseTaskIdError, TaskDomainError};
pub use ids::TaskId;
pub use image::{ImageUpload, StorageKey};
pub use task::{NewTask, PersistedTaskData, Task};
pub use text::{TaskDetail, TaskTitle};
