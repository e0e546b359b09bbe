//! End-to-end create-then-list behaviour over the in-memory adapters.

use super::helpers::{creation_service, seed, stepped_repository};
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryObjectStore,
    domain::ImageUpload,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskCreationError},
};

#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_at_the_top_of_a_subsequent_load() {
    let repository = stepped_repository();
    let store = Arc::new(InMemoryObjectStore::new());
    seed(&repository, "older task").await;

    let service = creation_service(&repository, &store);
    let created = service
        .submit(CreateTaskRequest::new("Buy milk", "2 liters"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.title().as_str(), "Buy milk");
    assert_eq!(created.detail().as_str(), "2 liters");
    assert_eq!(created.image_url(), None);
    assert!(!created.is_completed());

    let listed = repository
        .list_recent_first()
        .await
        .expect("list should succeed");
    let newest = listed.first().expect("two rows exist");
    assert_eq!(newest.id(), created.id());
    assert_eq!(listed.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn created_task_references_the_uploaded_image() {
    let repository = stepped_repository();
    let store = Arc::new(InMemoryObjectStore::new());
    let service = creation_service(&repository, &store);

    let image = ImageUpload::new("milk.png", "image/png", vec![1, 2, 3]).expect("valid image");
    let created = service
        .submit(CreateTaskRequest::new("Buy milk", "2 liters").with_image(image))
        .await
        .expect("creation should succeed");

    let url = created.image_url().expect("image URL recorded");
    assert!(url.starts_with("memory://task_bk/"));
    assert!(url.ends_with("_milk.png"));
    assert_eq!(store.object_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn whitespace_only_fields_are_rejected_before_any_write() {
    let repository = stepped_repository();
    let store = Arc::new(InMemoryObjectStore::new());
    let service = creation_service(&repository, &store);

    let result = service
        .submit(CreateTaskRequest::new("   ", "2 liters"))
        .await;

    assert!(matches!(result, Err(TaskCreationError::Validation(_))));
    let listed = repository
        .list_recent_first()
        .await
        .expect("list should succeed");
    assert!(listed.is_empty());
    assert_eq!(store.object_count(), 0);
}
