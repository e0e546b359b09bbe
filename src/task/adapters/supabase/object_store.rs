//! Hosted-bucket object store over the Storage API.

use super::client::{IMAGE_BUCKET, SupabaseClient, SupabaseError, ensure_success};
use crate::task::{
    domain::StorageKey,
    ports::{ObjectStore, ObjectStoreError, ObjectStoreResult},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Object store backed by the hosted gateway's public image bucket.
#[derive(Debug, Clone)]
pub struct SupabaseObjectStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseObjectStore {
    /// Creates a store sharing the given gateway client.
    #[must_use]
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for SupabaseObjectStore {
    async fn put(
        &self,
        key: &StorageKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> ObjectStoreResult<()> {
        let url = format!(
            "{}/object/{}/{}",
            self.client.storage_url(),
            IMAGE_BUCKET,
            urlencoding::encode(key.as_str())
        );
        let response = self
            .client
            .post(url)
            .header("Content-Type", content_type.to_owned())
            .body(bytes)
            .send()
            .await
            .map_err(|err| ObjectStoreError::storage(SupabaseError::from(err)))?;
        ensure_success(response)
            .await
            .map_err(ObjectStoreError::storage)?;
        tracing::debug!(key = %key, "image uploaded");
        Ok(())
    }

    /// Resolves the public URL for a stored key.
    ///
    /// This is local computation against the bucket's naming convention;
    /// no request is made.
    fn public_url(&self, key: &StorageKey) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.client.storage_url(),
            IMAGE_BUCKET,
            urlencoding::encode(key.as_str())
        )
    }
}
