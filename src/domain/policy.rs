//! Advisory allowlist policy
//!
//! Loaded once per run from `security/rustsec-policy.json`; immutable for
//! the run's duration.

use crate::error::ConfigError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default review window when the policy file omits it
pub const DEFAULT_REVIEW_WINDOW_DAYS: u32 = 45;

/// Time-boxed exception for a single advisory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllowlistEntry {
    /// Advisory identifier, unique within a policy
    pub id: String,
    /// Deadline by which the exception must be re-reviewed
    #[serde(default)]
    pub review_by: Option<NaiveDate>,
    /// Free-form justification; parsed but not interpreted
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyMetadata {
    #[serde(default = "default_review_window")]
    pub max_review_window_days: u32,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            max_review_window_days: DEFAULT_REVIEW_WINDOW_DAYS,
        }
    }
}

fn default_review_window() -> u32 {
    DEFAULT_REVIEW_WINDOW_DAYS
}

/// Allowlist policy for advisory warnings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub allow: Vec<AllowlistEntry>,
    #[serde(default)]
    pub metadata: PolicyMetadata,
}

impl PolicyConfig {
    /// Loads and validates the policy file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::missing(path));
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let policy: Self =
            serde_json::from_str(&raw).map_err(|e| ConfigError::parse(path, e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parses a policy from raw JSON and validates it
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let policy: Self = serde_json::from_str(raw)
            .map_err(|e| ConfigError::Invalid { message: e.to_string() })?;
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.metadata.max_review_window_days < 1 {
            return Err(ConfigError::InvalidReviewWindow);
        }
        Ok(())
    }

    /// Looks up the allowlist entry for an advisory id
    pub fn entry(&self, advisory_id: &str) -> Option<&AllowlistEntry> {
        self.allow.iter().find(|e| e.id == advisory_id)
    }

    pub fn max_review_window_days(&self) -> u32 {
        self.metadata.max_review_window_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let policy = PolicyConfig::from_json("{}").unwrap();
        assert!(policy.allow.is_empty());
        assert_eq!(policy.max_review_window_days(), 45);
    }

    #[test]
    fn test_from_json_full() {
        let policy = PolicyConfig::from_json(
            r#"{
                "allow": [
                    { "id": "RUSTSEC-2023-0100", "review_by": "2024-02-01", "reason": "transitive" },
                    { "id": "RUSTSEC-2023-0200" }
                ],
                "metadata": { "max_review_window_days": 30 }
            }"#,
        )
        .unwrap();
        assert_eq!(policy.allow.len(), 2);
        assert_eq!(policy.max_review_window_days(), 30);

        let entry = policy.entry("RUSTSEC-2023-0100").unwrap();
        assert_eq!(
            entry.review_by,
            Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
        assert!(policy.entry("RUSTSEC-2023-0200").unwrap().review_by.is_none());
        assert!(policy.entry("RUSTSEC-9999-9999").is_none());
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = PolicyConfig::from_json(r#"{"metadata": {"max_review_window_days": 0}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_malformed_date_rejected() {
        assert!(PolicyConfig::from_json(
            r#"{"allow": [{"id": "X", "review_by": "soonish"}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rustsec-policy.json");
        let err = PolicyConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rustsec-policy.json");
        std::fs::write(&path, r#"{"allow": [{"id": "RUSTSEC-2024-0001"}]}"#).unwrap();
        let policy = PolicyConfig::load(&path).unwrap();
        assert_eq!(policy.allow.len(), 1);
    }
}
