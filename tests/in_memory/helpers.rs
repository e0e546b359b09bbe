//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use taskboard::task::{
    adapters::memory::{InMemoryObjectStore, InMemoryTaskRepository},
    domain::{NewTask, Task},
    ports::TaskRepository,
    services::TaskCreationService,
};

/// Clock advancing by one second per reading, so every inserted row gets
/// a distinct creation timestamp.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(base: DateTime<Utc>) -> Self {
        Self {
            base,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// A fixed reference instant for deterministic timestamps.
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Repository stamping rows with strictly increasing timestamps.
pub fn stepped_repository() -> Arc<InMemoryTaskRepository<SteppingClock>> {
    Arc::new(InMemoryTaskRepository::with_clock(Arc::new(
        SteppingClock::starting_at(reference_instant()),
    )))
}

/// Creation service over the given in-memory adapters.
pub fn creation_service(
    repository: &Arc<InMemoryTaskRepository<SteppingClock>>,
    store: &Arc<InMemoryObjectStore>,
) -> TaskCreationService<InMemoryTaskRepository<SteppingClock>, InMemoryObjectStore, SteppingClock>
{
    TaskCreationService::new(
        Arc::clone(repository),
        Arc::clone(store),
        Arc::new(SteppingClock::starting_at(reference_instant())),
    )
}

/// Inserts a bare row with the given title.
pub async fn seed(repository: &Arc<InMemoryTaskRepository<SteppingClock>>, title: &str) -> Task {
    repository
        .insert(NewTask::new(title, "detail", false).expect("valid payload"))
        .await
        .expect("insert should succeed")
}
