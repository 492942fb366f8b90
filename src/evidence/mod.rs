//! Machine-readable evidence from external collaborators
//!
//! The gate never scans or resolves anything itself; it consumes the output
//! of an external vulnerability scanner and of the dependency-graph
//! descriptor. Both are reached through the `EvidenceSource` trait so tests
//! can substitute fixed reports without subprocess access.

mod graph;

pub use graph::{ResolvedVersions, REGISTRY_SOURCE_PREFIX};

use crate::domain::AdvisoryReport;
use crate::error::EvidenceError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const AUDIT_COMMAND: &str = "cargo audit --json";
const METADATA_COMMAND: &str = "cargo metadata --format-version 1 --locked";

/// Capability producing the two evidence inputs for one run
pub trait EvidenceSource {
    /// Runs the vulnerability scanner and parses its report
    fn advisory_report(&self) -> Result<AdvisoryReport, EvidenceError>;

    /// Enumerates resolved package versions from the dependency graph
    fn resolved_versions(&self) -> Result<ResolvedVersions, EvidenceError>;
}

/// Evidence source backed by cargo subprocesses in a project directory
pub struct CargoEvidence {
    workdir: PathBuf,
}

impl CargoEvidence {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str], display: &str) -> Result<std::process::Output, EvidenceError> {
        Command::new("cargo")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| EvidenceError::invocation(display, e.to_string()))
    }
}

impl EvidenceSource for CargoEvidence {
    fn advisory_report(&self) -> Result<AdvisoryReport, EvidenceError> {
        let output = self.run(&["audit", "--json"], AUDIT_COMMAND)?;

        // The scanner exits non-zero when it has findings; its stdout report
        // is still the evidence. Only unparsable output is an invocation
        // problem.
        let stdout = String::from_utf8_lossy(&output.stdout);
        match AdvisoryReport::from_json(&stdout) {
            Ok(report) => Ok(report),
            Err(parse_err) => {
                if output.status.success() {
                    Err(EvidenceError::invalid_output(
                        AUDIT_COMMAND,
                        parse_err.to_string(),
                    ))
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(EvidenceError::invocation(
                        AUDIT_COMMAND,
                        stderr.trim().to_string(),
                    ))
                }
            }
        }
    }

    fn resolved_versions(&self) -> Result<ResolvedVersions, EvidenceError> {
        let output = self.run(
            &["metadata", "--format-version", "1", "--locked"],
            METADATA_COMMAND,
        )?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EvidenceError::invocation(
                METADATA_COMMAND,
                stderr.trim().to_string(),
            ));
        }
        ResolvedVersions::from_metadata_json(&String::from_utf8_lossy(&output.stdout))
    }
}
