//! Gateway configuration sourced from the process environment.
//!
//! The hosted gateway needs exactly two settings: the service endpoint URL
//! and the public API key. Both are required; startup must treat a missing
//! or blank value as fatal rather than failing later on the first remote
//! call.

use thiserror::Error;
use url::Url;

/// Environment variable holding the gateway endpoint URL.
pub const SERVICE_URL_VAR: &str = "TASKBOARD_SERVICE_URL";

/// Environment variable holding the gateway public API key.
pub const API_KEY_VAR: &str = "TASKBOARD_API_KEY";

/// Errors raised while loading gateway configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("missing required setting {0}")]
    MissingSetting(&'static str),

    /// The endpoint value is not a valid URL.
    #[error("invalid service endpoint '{value}': {source}")]
    InvalidEndpoint {
        /// The rejected endpoint value.
        value: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },
}

/// Validated connection settings for the hosted gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    endpoint: Url,
    api_key: String,
}

impl GatewayConfig {
    /// Creates a configuration from explicit endpoint and key values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] when either value is blank
    /// after trimming, or [`ConfigError::InvalidEndpoint`] when the
    /// endpoint does not parse as a URL.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, ConfigError> {
        Self::from_values(
            non_blank(endpoint).map(str::to_owned),
            non_blank(api_key).map(str::to_owned),
        )
    }

    /// Loads configuration from [`SERVICE_URL_VAR`] and [`API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] when either variable is
    /// unset or blank, or [`ConfigError::InvalidEndpoint`] when the
    /// endpoint does not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(SERVICE_URL_VAR).ok(),
            std::env::var(API_KEY_VAR).ok(),
        )
    }

    fn from_values(
        endpoint: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint = endpoint
            .as_deref()
            .and_then(non_blank)
            .ok_or(ConfigError::MissingSetting(SERVICE_URL_VAR))?
            .to_owned();
        let api_key = api_key
            .as_deref()
            .and_then(non_blank)
            .ok_or(ConfigError::MissingSetting(API_KEY_VAR))?
            .to_owned();

        let endpoint = Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            value: endpoint.clone(),
            source,
        })?;

        Ok(Self { endpoint, api_key })
    }

    /// Returns the gateway endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the gateway public API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Returns the trimmed value when it is non-empty.
fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
