//! HTTP client shared foundation
//!
//! Thin wrapper over reqwest with a bounded per-request timeout and a
//! proper User-Agent. Lookups are never retried; a failed fetch is isolated
//! to its dependency and reported.

use crate::error::RegistryError;
use reqwest::Client;
use std::time::Duration;

/// Upper bound on a single registry request
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header; crates.io rejects anonymous clients
const DEFAULT_USER_AGENT: &str = concat!("depgate/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for registry lookups
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::Client {
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &'static str,
    ) -> Result<T, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegistryError::network(package, registry, e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::not_found(package, registry));
        }
        if !status.is_success() {
            return Err(RegistryError::Status {
                package: package.to_string(),
                registry: registry.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RegistryError::invalid_response(package, registry, e.to_string()))
    }
}
