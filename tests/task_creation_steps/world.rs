//! Shared world state for task creation behaviour scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryObjectStore, InMemoryTaskRepository},
    domain::{StorageKey, Task},
    ports::{ObjectStore, ObjectStoreError, ObjectStoreResult},
    services::{CreateTaskRequest, TaskCreationError, TaskCreationService},
};

/// Object store that can be switched into a rejecting mode mid-scenario.
pub struct ToggleStore {
    inner: InMemoryObjectStore,
    rejecting: AtomicBool,
}

impl ToggleStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryObjectStore::new(),
            rejecting: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent upload fail.
    pub fn reject_uploads(&self) {
        self.rejecting.store(true, Ordering::SeqCst);
    }

    pub fn object_count(&self) -> usize {
        self.inner.object_count()
    }
}

impl Default for ToggleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for ToggleStore {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ObjectStoreResult<()> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(ObjectStoreError::storage(std::io::Error::other(
                "upload rejected",
            )));
        }
        self.inner.put(key, bytes, content_type).await
    }

    fn public_url(&self, key: &StorageKey) -> String {
        self.inner.public_url(key)
    }
}

/// Service type used by the behaviour world.
pub type TestCreationService =
    TaskCreationService<InMemoryTaskRepository, ToggleStore, DefaultClock>;

/// Scenario world for task creation behaviour tests.
pub struct CreationWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub store: Arc<ToggleStore>,
    pub service: TestCreationService,
    pub pending: Option<CreateTaskRequest>,
    pub last_result: Option<Result<Task, TaskCreationError>>,
}

impl CreationWorld {
    /// Creates a world with empty pending scenario state.
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let store = Arc::new(ToggleStore::new());
        let service = TaskCreationService::new(
            Arc::clone(&repository),
            Arc::clone(&store),
            Arc::new(DefaultClock),
        );
        Self {
            repository,
            store,
            service,
            pending: None,
            last_result: None,
        }
    }
}

impl Default for CreationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CreationWorld {
    CreationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
