//! Per-dependency freshness outcomes
//!
//! Outcomes exist only for the duration of one evaluation; every invocation
//! recomputes them.

use std::fmt;

/// Run mode for the freshness watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Violations fail the run
    #[default]
    Strict,
    /// Violations are surfaced but never affect the exit status
    Advisory,
}

impl RunMode {
    pub fn is_advisory(self) -> bool {
        matches!(self, RunMode::Advisory)
    }

    pub fn label(self) -> &'static str {
        match self {
            RunMode::Strict => "strict",
            RunMode::Advisory => "advisory",
        }
    }
}

/// How a watched dependency compares against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// Current version matches or exceeds the registry's latest
    UpToDate,
    /// A newer version exists; not fatal
    OutdatedWarn,
    /// A newer version exists and staleness is fatal for this entry
    OutdatedFail,
    /// Not present in the resolved dependency graph
    Missing,
    /// Registry lookup failed or returned an unusable payload
    FetchError,
}

impl ComparisonOutcome {
    pub fn label(self) -> &'static str {
        match self {
            ComparisonOutcome::UpToDate => "up-to-date",
            ComparisonOutcome::OutdatedWarn => "outdated-warn",
            ComparisonOutcome::OutdatedFail => "outdated-fail",
            ComparisonOutcome::Missing => "missing",
            ComparisonOutcome::FetchError => "fetch-error",
        }
    }
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One report row per watched dependency, emitted regardless of outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRow {
    pub name: String,
    pub group: String,
    /// Newest resolved version in the graph, when present
    pub current: Option<String>,
    /// Latest published version, when the lookup succeeded
    pub latest: Option<String>,
    pub outcome: ComparisonOutcome,
}

impl WatchRow {
    /// Current version for display; sentinel when absent from the graph
    pub fn current_display(&self) -> &str {
        self.current.as_deref().unwrap_or("not-found")
    }

    /// Latest version for display; sentinel depends on why it is absent
    pub fn latest_display(&self) -> &str {
        match (&self.latest, self.outcome) {
            (Some(latest), _) => latest,
            (None, ComparisonOutcome::FetchError) => "fetch-error",
            (None, _) => "n/a",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(ComparisonOutcome::UpToDate.label(), "up-to-date");
        assert_eq!(ComparisonOutcome::OutdatedWarn.label(), "outdated-warn");
        assert_eq!(ComparisonOutcome::OutdatedFail.label(), "outdated-fail");
        assert_eq!(ComparisonOutcome::Missing.label(), "missing");
        assert_eq!(ComparisonOutcome::FetchError.to_string(), "fetch-error");
    }

    #[test]
    fn test_run_mode() {
        assert_eq!(RunMode::default(), RunMode::Strict);
        assert!(RunMode::Advisory.is_advisory());
        assert!(!RunMode::Strict.is_advisory());
        assert_eq!(RunMode::Advisory.label(), "advisory");
    }

    #[test]
    fn test_row_sentinels() {
        let missing = WatchRow {
            name: "ghost".into(),
            group: "unknown".into(),
            current: None,
            latest: None,
            outcome: ComparisonOutcome::Missing,
        };
        assert_eq!(missing.current_display(), "not-found");
        assert_eq!(missing.latest_display(), "n/a");

        let fetch_error = WatchRow {
            name: "serde".into(),
            group: "runtime".into(),
            current: Some("1.2.0".into()),
            latest: None,
            outcome: ComparisonOutcome::FetchError,
        };
        assert_eq!(fetch_error.current_display(), "1.2.0");
        assert_eq!(fetch_error.latest_display(), "fetch-error");
    }
}
