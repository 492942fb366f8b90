//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: policy or watch-list file problems; fatal before evaluation
//! - EvidenceError: scan tool / graph descriptor invocation or output problems; fatal
//! - RegistryError: per-dependency registry lookup failures; isolated, never fatal

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the gate
#[derive(Error, Debug)]
pub enum GateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Evidence(#[from] EvidenceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Report lines could not be written
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in static configuration (policy file, watch-list)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file does not exist
    #[error("missing config at {path}")]
    Missing { path: PathBuf },

    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for its schema
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Config content is malformed (no file path available)
    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    /// Review window must allow at least one day
    #[error("metadata.max_review_window_days must be a positive integer")]
    InvalidReviewWindow,

    /// Watch-list present but empty
    #[error("no dependencies configured in {path}")]
    EmptyWatchList { path: PathBuf },
}

impl ConfigError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        ConfigError::Missing { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn empty_watch_list(path: impl Into<PathBuf>) -> Self {
        ConfigError::EmptyWatchList { path: path.into() }
    }
}

/// Errors obtaining machine-readable evidence from external collaborators
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// The backing command could not be spawned or failed outright
    #[error("failed to run {command} ({message})")]
    Invocation { command: String, message: String },

    /// The backing command ran but emitted output outside its schema
    #[error("unparsable output from {command}: {message}")]
    InvalidOutput { command: String, message: String },
}

impl EvidenceError {
    pub fn invocation(command: impl Into<String>, message: impl Into<String>) -> Self {
        EvidenceError::Invocation {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn invalid_output(command: impl Into<String>, message: impl Into<String>) -> Self {
        EvidenceError::InvalidOutput {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// Errors from the package-registry lookup
#[derive(Error, Debug)]
pub enum RegistryError {
    /// HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    /// Crate does not exist on the registry
    #[error("crate '{package}' not found on {registry}")]
    NotFound { package: String, registry: String },

    /// Registry answered with a non-success status
    #[error("{registry} request for '{package}' failed (HTTP {status})")]
    Status {
        package: String,
        registry: String,
        status: u16,
    },

    /// Request could not be completed (connection, timeout, ...)
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    Network {
        package: String,
        registry: String,
        message: String,
    },

    /// Response arrived but was not the expected payload
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Response parsed but carried no usable version field
    #[error("latest version missing from {registry} response for '{package}'")]
    MissingVersion { package: String, registry: String },
}

impl RegistryError {
    pub fn not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::NotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    pub fn network(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::Network {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    pub fn missing_version(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::MissingVersion {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_missing() {
        let err = ConfigError::missing("/repo/security/rustsec-policy.json");
        let msg = err.to_string();
        assert!(msg.contains("missing config"));
        assert!(msg.contains("rustsec-policy.json"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::parse("/repo/security/dependency-watch.json", "expected value");
        let msg = err.to_string();
        assert!(msg.contains("failed to parse"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_evidence_error_invocation() {
        let err = EvidenceError::invocation("cargo audit --json", "No such file or directory");
        let msg = err.to_string();
        assert!(msg.contains("failed to run cargo audit --json"));
    }

    #[test]
    fn test_evidence_error_invalid_output() {
        let err = EvidenceError::invalid_output("cargo metadata", "EOF while parsing");
        assert!(err.to_string().contains("unparsable output from cargo metadata"));
    }

    #[test]
    fn test_registry_error_not_found() {
        let err = RegistryError::not_found("ghost-crate", "crates.io");
        let msg = err.to_string();
        assert!(msg.contains("'ghost-crate' not found"));
        assert!(msg.contains("crates.io"));
    }

    #[test]
    fn test_registry_error_status() {
        let err = RegistryError::Status {
            package: "serde".into(),
            registry: "crates.io".into(),
            status: 503,
        };
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_registry_error_missing_version() {
        let err = RegistryError::missing_version("serde", "crates.io");
        assert!(err.to_string().contains("latest version missing"));
    }

    #[test]
    fn test_gate_error_transparent() {
        let err: GateError = ConfigError::missing("/x").into();
        assert!(err.to_string().contains("missing config"));

        let err: GateError = EvidenceError::invocation("cargo metadata", "boom").into();
        assert!(err.to_string().contains("failed to run"));
    }
}
