//! In-memory object store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::StorageKey,
    ports::{ObjectStore, ObjectStoreError, ObjectStoreResult},
};

/// Thread-safe in-memory object store.
///
/// Public URLs use a `memory://` scheme so tests can assert the
/// upload-then-reference ordering without a running gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    state: Arc<RwLock<HashMap<String, StoredObject>>>,
}

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

impl InMemoryObjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored bytes for a key, if present.
    #[must_use]
    pub fn stored_bytes(&self, key: &StorageKey) -> Option<Vec<u8>> {
        let state = self.state.read().ok()?;
        state.get(key.as_str()).map(|object| object.bytes.clone())
    }

    /// Returns the stored content type for a key, if present.
    #[must_use]
    pub fn stored_content_type(&self, key: &StorageKey) -> Option<String> {
        let state = self.state.read().ok()?;
        state
            .get(key.as_str())
            .map(|object| object.content_type.clone())
    }

    /// Returns the number of stored objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.state.read().map(|state| state.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ObjectStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ObjectStoreError::storage(std::io::Error::other(err.to_string())))?;
        state.insert(
            key.as_str().to_owned(),
            StoredObject {
                bytes,
                content_type: content_type.to_owned(),
            },
        );
        Ok(())
    }

    fn public_url(&self, key: &StorageKey) -> String {
        format!("memory://task_bk/{key}")
    }
}
