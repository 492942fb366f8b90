//! Freshness watch-list
//!
//! One entry per dependency the project tracks for upstream freshness,
//! independent of vulnerability status. Loaded fresh each run from
//! `security/dependency-watch.json`.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_group() -> String {
    "unknown".to_string()
}

/// A dependency tracked for freshness
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchedDependency {
    /// Crate name as published on the registry
    pub name: String,
    /// Reporting group (e.g. "runtime", "build")
    #[serde(default = "default_group")]
    pub group: String,
    /// Whether staleness is fatal in strict mode
    #[serde(default)]
    pub fail_on_update: bool,
}

impl WatchedDependency {
    /// Creates a watch entry; group defaults to "unknown"
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: default_group(),
            fail_on_update: false,
        }
    }

    /// Sets the reporting group (builder pattern)
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Marks staleness as fatal in strict mode (builder pattern)
    pub fn fail_on_update(mut self) -> Self {
        self.fail_on_update = true;
        self
    }
}

/// The configured watch-list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WatchList {
    #[serde(default)]
    pub dependencies: Vec<WatchedDependency>,
}

impl WatchList {
    /// Loads the watch-list; an empty list is a configuration error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::missing(path));
        }
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let list: Self =
            serde_json::from_str(&raw).map_err(|e| ConfigError::parse(path, e.to_string()))?;
        if list.dependencies.is_empty() {
            return Err(ConfigError::empty_watch_list(path));
        }
        Ok(list)
    }
}
