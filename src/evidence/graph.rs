//! Resolved dependency-graph descriptor
//!
//! Parses the `cargo metadata --format-version 1` package list into a map
//! from crate name to the set of versions present in the graph. Only
//! packages sourced from the public registry participate; a crate pulled
//! from a local path or git has no meaningful "latest" to compare against.

use crate::error::EvidenceError;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Source prefix identifying registry-sourced packages
pub const REGISTRY_SOURCE_PREFIX: &str = "registry+";

/// Versions actually present in the current dependency graph, per crate name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVersions {
    by_name: BTreeMap<String, BTreeSet<String>>,
}

#[derive(Debug, Deserialize)]
struct MetadataDoc {
    #[serde(default)]
    packages: Vec<MetadataPackage>,
}

#[derive(Debug, Deserialize)]
struct MetadataPackage {
    name: String,
    version: String,
    #[serde(default)]
    source: Option<String>,
}

/// Workspace-local packages report no source; everything else must come
/// from a registry to participate in freshness checks.
fn is_registry_source(source: Option<&str>) -> bool {
    match source {
        None => true,
        Some(s) => s.is_empty() || s.starts_with(REGISTRY_SOURCE_PREFIX),
    }
}

impl ResolvedVersions {
    /// Builds the version map from raw `cargo metadata` JSON
    pub fn from_metadata_json(raw: &str) -> Result<Self, EvidenceError> {
        let doc: MetadataDoc = serde_json::from_str(raw).map_err(|e| {
            EvidenceError::invalid_output("cargo metadata --format-version 1 --locked", e.to_string())
        })?;

        let mut resolved = Self::default();
        for pkg in doc.packages {
            if !is_registry_source(pkg.source.as_deref()) {
                continue;
            }
            resolved.insert(pkg.name, pkg.version);
        }
        Ok(resolved)
    }

    /// Records one resolved version for a crate
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.by_name
            .entry(name.into())
            .or_default()
            .insert(version.into());
    }

    /// All versions of a crate present in the graph, if any
    pub fn versions(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.by_name.get(name).filter(|set| !set.is_empty())
    }

    /// Number of distinct crate names in the graph
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "packages": [
            { "name": "serde", "version": "1.0.200",
              "source": "registry+https://github.com/rust-lang/crates.io-index" },
            { "name": "serde", "version": "1.0.150",
              "source": "registry+https://github.com/rust-lang/crates.io-index" },
            { "name": "myapp", "version": "0.1.0", "source": null },
            { "name": "patched-dep", "version": "2.0.0",
              "source": "git+https://example.com/patched-dep#abc123" },
            { "name": "local-helper", "version": "0.2.0",
              "source": "path+file:///work/local-helper" }
        ],
        "workspace_members": ["myapp 0.1.0"]
    }"#;

    #[test]
    fn test_registry_and_workspace_packages_participate() {
        let resolved = ResolvedVersions::from_metadata_json(SAMPLE).unwrap();

        let serde_versions: Vec<_> = resolved.versions("serde").unwrap().iter().collect();
        assert_eq!(serde_versions, ["1.0.150", "1.0.200"]);

        // no source at all means workspace-local; still enumerable
        assert!(resolved.versions("myapp").is_some());
    }

    #[test]
    fn test_non_registry_sources_excluded() {
        let resolved = ResolvedVersions::from_metadata_json(SAMPLE).unwrap();
        assert!(resolved.versions("patched-dep").is_none());
        assert!(resolved.versions("local-helper").is_none());
    }

    #[test]
    fn test_unknown_crate_absent() {
        let resolved = ResolvedVersions::from_metadata_json(SAMPLE).unwrap();
        assert!(resolved.versions("ghost").is_none());
    }

    #[test]
    fn test_malformed_metadata_rejected() {
        let err = ResolvedVersions::from_metadata_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("cargo metadata"));
    }

    #[test]
    fn test_empty_document() {
        let resolved = ResolvedVersions::from_metadata_json("{}").unwrap();
        assert!(resolved.is_empty());
        assert_eq!(resolved.len(), 0);
    }

    #[test]
    fn test_is_registry_source() {
        assert!(is_registry_source(None));
        assert!(is_registry_source(Some("")));
        assert!(is_registry_source(Some(
            "registry+https://github.com/rust-lang/crates.io-index"
        )));
        assert!(!is_registry_source(Some("git+https://example.com/x")));
        assert!(!is_registry_source(Some("path+file:///x")));
    }
}
