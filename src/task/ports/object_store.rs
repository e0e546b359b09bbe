//! Object store port for task images.

use crate::task::domain::StorageKey;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for object store operations.
pub type ObjectStoreResult<T> = Result<T, ObjectStoreError>;

/// Binary storage contract for task images.
///
/// Objects become publicly readable once stored; resolving the public URL
/// is a local computation against the store's naming convention, not a
/// second round trip.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores the bytes under the given key.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::Storage`] when the upload fails; the
    /// object must not be considered durable in that case.
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ObjectStoreResult<()>;

    /// Returns the publicly fetchable address for a stored key.
    fn public_url(&self, key: &StorageKey) -> String;
}

/// Errors returned by object store implementations.
#[derive(Debug, Clone, Error)]
pub enum ObjectStoreError {
    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl ObjectStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
