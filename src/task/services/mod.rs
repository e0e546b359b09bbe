//! Workflow services for task creation and the task list view.

pub mod creation;
pub mod listing;

pub use creation::{CreateTaskRequest, TaskCreationError, TaskCreationResult, TaskCreationService};
pub use listing::{
    DeleteConfirmation, DeleteOutcome, IMAGE_PLACEHOLDER, TaskListError, TaskListView,
    image_marker,
};
