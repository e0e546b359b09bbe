//! Then steps for task creation behaviour scenarios.

use super::world::{CreationWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{ports::TaskRepository, services::TaskCreationError};

#[then("the task list shows the new task without an image")]
fn list_shows_new_task(world: &CreationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result in scenario world"))?;
    let created = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected save failure: {err}"))?;

    if created.image_url().is_some() {
        return Err(eyre::eyre!("expected no image URL on the created task"));
    }

    let listed = run_async(world.repository.list_recent_first())
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    match listed.first() {
        Some(newest) if newest.id() == created.id() => Ok(()),
        _ => Err(eyre::eyre!("expected the created task at the top of the list")),
    }
}

#[then("saving fails validation and nothing was stored")]
fn save_fails_validation(world: &CreationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result in scenario world"))?;
    if !matches!(result, Err(TaskCreationError::Validation(_))) {
        return Err(eyre::eyre!("expected a validation failure, got {result:?}"));
    }

    let listed = run_async(world.repository.list_recent_first())
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected no persisted rows"));
    }
    if world.store.object_count() != 0 {
        return Err(eyre::eyre!("expected no stored objects"));
    }
    Ok(())
}

#[then("saving fails with an upload error and no task row exists")]
fn save_fails_upload(world: &CreationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing save result in scenario world"))?;
    if !matches!(result, Err(TaskCreationError::Upload(_))) {
        return Err(eyre::eyre!("expected an upload failure, got {result:?}"));
    }

    let listed = run_async(world.repository.list_recent_first())
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected no persisted rows after a failed upload"));
    }
    Ok(())
}
