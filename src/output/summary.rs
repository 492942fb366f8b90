//! Append-only summary artifact
//!
//! When the environment supplies a summary path (CI step summaries), the
//! watch run appends a markdown block with the full outcome table. The file
//! is never truncated; prior content from earlier steps is preserved.

use crate::domain::{RunMode, Violation, WatchRow};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Environment variable naming the summary file
pub const SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Markdown summary appended to a CI-provided file
pub struct SummaryArtifact {
    path: PathBuf,
}

impl SummaryArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Artifact configured from the environment, when present
    pub fn from_env() -> Option<Self> {
        std::env::var_os(SUMMARY_ENV)
            .filter(|v| !v.is_empty())
            .map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the watch summary block as markdown lines
    fn watch_block(
        mode: RunMode,
        timestamp: DateTime<Utc>,
        rows: &[WatchRow],
        violations: &[Violation],
    ) -> String {
        let mut lines = vec![
            "## Dependency Watch".to_string(),
            String::new(),
            format!("- Mode: {}", mode.label()),
            format!(
                "- Timestamp (UTC): {}",
                timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            String::new(),
            "| Crate | Group | Current | Latest | Outcome |".to_string(),
            "|---|---|---|---|---|".to_string(),
        ];

        for row in rows {
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                row.name,
                row.group,
                row.current_display(),
                row.latest_display(),
                row.outcome
            ));
        }

        if !violations.is_empty() {
            lines.push(String::new());
            lines.push("### Failures".to_string());
            for violation in violations {
                lines.push(format!("- {violation}"));
            }
        }

        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    /// Appends the watch outcome table; never overwrites prior content
    pub fn append_watch(
        &self,
        mode: RunMode,
        timestamp: DateTime<Utc>,
        rows: &[WatchRow],
        violations: &[Violation],
    ) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(Self::watch_block(mode, timestamp, rows, violations).as_bytes())
    }
}
