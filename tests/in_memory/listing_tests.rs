//! Ordering and delete reconciliation over the in-memory adapters.

use super::helpers::{seed, stepped_repository};
use std::sync::Arc;
use taskboard::task::{
    ports::TaskRepository,
    services::{DeleteConfirmation, DeleteOutcome, TaskListView},
};

#[tokio::test(flavor = "multi_thread")]
async fn load_returns_strictly_descending_creation_times() {
    let repository = stepped_repository();
    for title in ["one", "two", "three", "four"] {
        seed(&repository, title).await;
    }

    let mut view = TaskListView::new(Arc::clone(&repository));
    let loaded = view.load().await.expect("load should succeed");

    assert_eq!(loaded.len(), 4);
    for pair in loaded.windows(2) {
        let [newer, older] = pair else {
            continue;
        };
        assert!(newer.created_at() > older.created_at());
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn confirmed_delete_reconciles_view_and_table() {
    let repository = stepped_repository();
    let keep = seed(&repository, "keep").await;
    let remove = seed(&repository, "remove").await;

    let mut view = TaskListView::new(Arc::clone(&repository));
    view.load().await.expect("load should succeed");

    let outcome = view
        .delete(remove.id(), DeleteConfirmation::Confirmed)
        .await
        .expect("delete should succeed");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(view.tasks().len(), 1);
    assert!(view.tasks().iter().any(|task| task.id() == keep.id()));

    let remote = repository
        .list_recent_first()
        .await
        .expect("list should succeed");
    assert_eq!(remote.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn declined_delete_touches_nothing() {
    let repository = stepped_repository();
    let target = seed(&repository, "survivor").await;

    let mut view = TaskListView::new(Arc::clone(&repository));
    view.load().await.expect("load should succeed");

    let outcome = view
        .delete(target.id(), DeleteConfirmation::Declined)
        .await
        .expect("declined delete is not an error");

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(view.tasks().len(), 1);
    let remote = repository
        .list_recent_first()
        .await
        .expect("list should succeed");
    assert_eq!(remote.len(), 1);
}
