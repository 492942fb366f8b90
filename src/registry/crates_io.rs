//! crates.io API adapter
//!
//! Fetches the latest published version of a crate from crates.io.
//! API endpoint: https://crates.io/api/v1/crates/{crate}
//!
//! The payload carries several "latest" fields; the first non-empty of
//! max_stable_version, max_version, newest_version wins, in that order.

use crate::error::RegistryError;
use crate::registry::{HttpClient, LatestVersionSource};
use async_trait::async_trait;
use serde::Deserialize;

/// crates.io API base URL
const CRATES_IO_API_URL: &str = "https://crates.io/api/v1/crates";

/// crates.io lookup for latest published versions
pub struct CratesIoRegistry {
    client: HttpClient,
    base_url: String,
}

/// crates.io crate response envelope
#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateData,
}

/// The subset of crate metadata the gate cares about
#[derive(Debug, Default, Deserialize)]
struct CrateData {
    #[serde(default)]
    max_stable_version: Option<String>,
    #[serde(default)]
    max_version: Option<String>,
    #[serde(default)]
    newest_version: Option<String>,
}

impl CrateData {
    /// First present, non-empty latest-version field in priority order
    fn latest(&self) -> Option<&str> {
        [
            self.max_stable_version.as_deref(),
            self.max_version.as_deref(),
            self.newest_version.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
    }
}

impl CratesIoRegistry {
    /// Create a new crates.io adapter
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: CRATES_IO_API_URL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (test servers)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the URL for a crate
    fn crate_url(&self, crate_name: &str) -> String {
        format!("{}/{}", self.base_url, crate_name)
    }
}

#[async_trait]
impl LatestVersionSource for CratesIoRegistry {
    fn registry_name(&self) -> &'static str {
        "crates.io"
    }

    async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.crate_url(package);
        let response: CrateResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        response
            .krate
            .latest()
            .map(str::to_owned)
            .ok_or_else(|| RegistryError::missing_version(package, self.registry_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CratesIoRegistry {
        CratesIoRegistry::new(HttpClient::new().unwrap())
    }

    #[test]
    fn test_registry_name() {
        assert_eq!(registry().registry_name(), "crates.io");
    }

    #[test]
    fn test_crate_url() {
        assert_eq!(
            registry().crate_url("serde"),
            "https://crates.io/api/v1/crates/serde"
        );
        assert_eq!(
            registry().crate_url("serde_json"),
            "https://crates.io/api/v1/crates/serde_json"
        );
    }

    #[test]
    fn test_crate_url_with_base_override() {
        let registry =
            CratesIoRegistry::with_base_url(HttpClient::new().unwrap(), "http://127.0.0.1:9/api");
        assert_eq!(registry.crate_url("tokio"), "http://127.0.0.1:9/api/tokio");
    }

    #[test]
    fn test_latest_field_priority() {
        let data: CrateResponse = serde_json::from_str(
            r#"{"crate": {"max_stable_version": "1.2.0", "max_version": "2.0.0-rc.1", "newest_version": "2.0.0-rc.1"}}"#,
        )
        .unwrap();
        assert_eq!(data.krate.latest(), Some("1.2.0"));
    }

    #[test]
    fn test_latest_falls_through_missing_fields() {
        let data: CrateResponse = serde_json::from_str(
            r#"{"crate": {"max_version": "2.0.0-rc.1", "newest_version": "1.9.0"}}"#,
        )
        .unwrap();
        assert_eq!(data.krate.latest(), Some("2.0.0-rc.1"));

        let data: CrateResponse =
            serde_json::from_str(r#"{"crate": {"newest_version": "1.9.0"}}"#).unwrap();
        assert_eq!(data.krate.latest(), Some("1.9.0"));
    }

    #[test]
    fn test_latest_skips_empty_strings() {
        let data: CrateResponse = serde_json::from_str(
            r#"{"crate": {"max_stable_version": "", "max_version": "1.4.2"}}"#,
        )
        .unwrap();
        assert_eq!(data.krate.latest(), Some("1.4.2"));
    }

    #[test]
    fn test_latest_none_when_all_absent() {
        let data: CrateResponse = serde_json::from_str(r#"{"crate": {}}"#).unwrap();
        assert_eq!(data.krate.latest(), None);
    }
}
