//! Hosted-table task repository over PostgREST.

use super::{
    client::{SupabaseClient, SupabaseError, TASK_TABLE, ensure_success},
    models::{NewTaskRow, TASK_COLUMNS, TaskRow},
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskDetail, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Task repository backed by the hosted gateway's table API.
#[derive(Debug, Clone)]
pub struct SupabaseTaskRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseTaskRepository {
    /// Creates a repository sharing the given gateway client.
    #[must_use]
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskRepository for SupabaseTaskRepository {
    async fn list_recent_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        let url = format!(
            "{}/{}?select={}&order=created_at.desc",
            self.client.rest_url(),
            TASK_TABLE,
            TASK_COLUMNS
        );
        let rows = fetch_rows(&self.client, url)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        rows.into_iter()
            .map(|row| row_to_task(row).map_err(TaskRepositoryError::persistence))
            .collect()
    }

    async fn insert(&self, payload: NewTask) -> TaskRepositoryResult<Task> {
        let row = NewTaskRow {
            title: payload.title().as_str().to_owned(),
            detail: payload.detail().as_str().to_owned(),
            image_url: payload.image_url().map(str::to_owned),
            is_completed: payload.is_completed(),
        };
        let inserted = insert_row(&self.client, &row)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        row_to_task(inserted).map_err(TaskRepositoryError::persistence)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let url = format!(
            "{}/{}?id=eq.{}",
            self.client.rest_url(),
            TASK_TABLE,
            id.into_inner()
        );
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| TaskRepositoryError::persistence(SupabaseError::from(err)))?;
        // A filtered delete matching zero rows still answers 2xx, which
        // keeps removal idempotent.
        ensure_success(response)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        Ok(())
    }
}

async fn fetch_rows(client: &SupabaseClient, url: String) -> Result<Vec<TaskRow>, SupabaseError> {
    let response = client.get(url).send().await?;
    let response = ensure_success(response).await?;
    Ok(response.json().await?)
}

async fn insert_row(client: &SupabaseClient, row: &NewTaskRow) -> Result<TaskRow, SupabaseError> {
    let url = format!("{}/{}", client.rest_url(), TASK_TABLE);
    let response = client
        .post(url)
        .header("Prefer", "return=representation")
        .json(row)
        .send()
        .await?;
    let response = ensure_success(response).await?;
    let mut rows: Vec<TaskRow> = response.json().await?;
    if rows.is_empty() {
        return Err(SupabaseError::MissingInsertedRow);
    }
    Ok(rows.swap_remove(0))
}

/// Converts a wire row into the domain aggregate.
///
/// Historic rows store `""` for "no image"; that is normalised to absent.
fn row_to_task(row: TaskRow) -> Result<Task, SupabaseError> {
    let image_url = row.image_url.filter(|url| !url.is_empty());
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: TaskTitle::new(row.title)?,
        detail: TaskDetail::new(row.detail)?,
        image_url,
        is_completed: row.is_completed,
        created_at: row.created_at,
        updated_at: row.update_at,
    }))
}
