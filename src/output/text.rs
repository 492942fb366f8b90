//! Text rendering for gate results
//!
//! Human-readable report lines: one row per watched dependency regardless
//! of outcome, violations as a distinct bulleted block, and a final
//! verdict. Nothing is suppressed in advisory mode; only the verdict and
//! exit decision differ.

use crate::domain::{ComparisonOutcome, RunMode, Violation, WatchRow};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

/// Text renderer for audit and watch reports
pub struct TextReport {
    /// Whether to use colors (when supported)
    color: bool,
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReport {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a renderer with colors forced on or off
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn outcome_label(&self, outcome: ComparisonOutcome) -> String {
        if !self.color {
            return outcome.label().to_string();
        }
        match outcome {
            ComparisonOutcome::UpToDate => outcome.label().green().to_string(),
            ComparisonOutcome::OutdatedWarn => outcome.label().yellow().to_string(),
            ComparisonOutcome::OutdatedFail
            | ComparisonOutcome::Missing
            | ComparisonOutcome::FetchError => outcome.label().red().to_string(),
        }
    }

    /// Mode line plus one aligned row per watched dependency
    pub fn render_watch_rows(
        &self,
        mode: RunMode,
        rows: &[WatchRow],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(writer, "depgate: mode={}", mode.label())?;
        for row in rows {
            writeln!(
                writer,
                "  - {:<12} group={:<10} current={:<12} latest={:<12} outcome={}",
                row.name,
                row.group,
                row.current_display(),
                row.latest_display(),
                self.outcome_label(row.outcome)
            )?;
        }
        Ok(())
    }

    /// Violations as a bulleted block under a heading
    pub fn render_violations(
        &self,
        heading: &str,
        violations: &[Violation],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        if self.color {
            writeln!(writer, "{}", heading.red().bold())?;
        } else {
            writeln!(writer, "{heading}")?;
        }
        for violation in violations {
            writeln!(writer, "  - {violation}")?;
        }
        Ok(())
    }

    /// Advisory-mode warning block: same violations, softer framing
    pub fn render_advisory_warnings(
        &self,
        violations: &[Violation],
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let heading = "depgate: advisory warnings:";
        if self.color {
            writeln!(writer, "{}", heading.yellow())?;
        } else {
            writeln!(writer, "{heading}")?;
        }
        for violation in violations {
            writeln!(writer, "  - {violation}")?;
        }
        Ok(())
    }

    /// Watch verdict line for a passing run
    pub fn render_watch_pass(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "depgate: PASS")
    }

    /// Audit verdict line for a passing run, with run statistics
    pub fn render_audit_pass(
        &self,
        advisory_warnings: usize,
        today: NaiveDate,
        max_review_window_days: u32,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "depgate: PASS (vulnerabilities=0, advisory_warnings={advisory_warnings}, date={today}, max_review_window_days={max_review_window_days})"
        )
    }
}
