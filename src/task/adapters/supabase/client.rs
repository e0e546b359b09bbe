//! Shared HTTP client for the hosted gateway.

use crate::config::GatewayConfig;
use crate::task::domain::TaskDomainError;
use reqwest::{RequestBuilder, Response, StatusCode};
use thiserror::Error;

/// Table holding task rows.
pub(crate) const TASK_TABLE: &str = "task_tb";

/// Bucket holding task images.
pub(crate) const IMAGE_BUCKET: &str = "task_bk";

/// Errors returned by gateway calls.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// The HTTP request itself failed (connection, timeout, decode).
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned {status}: {body}")]
    UnexpectedStatus {
        /// Response status code.
        status: StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },

    /// An insert with `return=representation` came back without a row.
    #[error("gateway returned no row for the inserted task")]
    MissingInsertedRow,

    /// A fetched row failed domain validation.
    #[error(transparent)]
    Row(#[from] TaskDomainError),
}

/// Authenticated HTTP access to one gateway deployment.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseClient {
    /// Creates a client for the configured gateway.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint().as_str().trim_end_matches('/').to_owned(),
            api_key: config.api_key().to_owned(),
        }
    }

    /// Returns the PostgREST base URL.
    pub(crate) fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.endpoint)
    }

    /// Returns the Storage base URL.
    pub(crate) fn storage_url(&self) -> String {
        format!("{}/storage/v1", self.endpoint)
    }

    /// Starts an authenticated GET request.
    pub(crate) fn get(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    /// Starts an authenticated POST request.
    pub(crate) fn post(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    /// Starts an authenticated DELETE request.
    pub(crate) fn delete(&self, url: String) -> RequestBuilder {
        self.authorize(self.http.delete(url))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

/// Passes through success responses and turns everything else into
/// [`SupabaseError::UnexpectedStatus`] with the body preserved.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, "gateway request failed");
    Err(SupabaseError::UnexpectedStatus { status, body })
}
