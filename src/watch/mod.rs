//! Freshness watcher
//!
//! Compares each watched dependency against the newest published version on
//! the registry. Dependencies are processed strictly in configured list
//! order, one fetch awaited at a time, so row order is deterministic and a
//! single failing lookup never aborts the batch.

use crate::domain::{
    ComparisonOutcome, RunMode, SemanticVersion, Violation, WatchRow, WatchedDependency,
};
use crate::evidence::ResolvedVersions;
use crate::progress::Progress;
use crate::registry::LatestVersionSource;

/// Everything one watch run produced: a row per dependency plus the
/// aggregated failing violations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchReport {
    pub rows: Vec<WatchRow>,
    pub violations: Vec<Violation>,
}

impl WatchReport {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Newest parseable version among the resolved candidates
///
/// Candidates outside the version grammar are reported through `violations`
/// and excluded; an ambiguous graph must never silently pass.
fn current_version<'a, I>(
    name: &str,
    candidates: I,
    violations: &mut Vec<Violation>,
) -> Option<(&'a str, SemanticVersion)>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut best: Option<(&'a str, SemanticVersion)> = None;
    for candidate in candidates {
        match SemanticVersion::parse(candidate) {
            Ok(parsed) => {
                let newer = match &best {
                    Some((_, current_best)) => parsed > *current_best,
                    None => true,
                };
                if newer {
                    best = Some((candidate, parsed));
                }
            }
            Err(_) => violations.push(Violation::UnparsableGraphVersion {
                name: name.to_string(),
                version: candidate.clone(),
            }),
        }
    }
    best
}

/// Checks every watched dependency against the registry
pub async fn check(
    watchlist: &[WatchedDependency],
    resolved: &ResolvedVersions,
    registry: &dyn LatestVersionSource,
    mode: RunMode,
    progress: &Progress,
) -> WatchReport {
    let mut report = WatchReport::default();

    for dep in watchlist {
        progress.checking(&dep.name);
        check_one(dep, resolved, registry, mode, &mut report).await;
        progress.inc();
    }

    report
}

async fn check_one(
    dep: &WatchedDependency,
    resolved: &ResolvedVersions,
    registry: &dyn LatestVersionSource,
    mode: RunMode,
    report: &mut WatchReport,
) {
    let row = |current: Option<String>, latest: Option<String>, outcome| WatchRow {
        name: dep.name.clone(),
        group: dep.group.clone(),
        current,
        latest,
        outcome,
    };

    let Some(versions) = resolved.versions(&dep.name) else {
        report.violations.push(Violation::NotInGraph {
            name: dep.name.clone(),
        });
        report.rows.push(row(None, None, ComparisonOutcome::Missing));
        return;
    };

    let Some((current_str, current)) =
        current_version(&dep.name, versions, &mut report.violations)
    else {
        // every resolved version was unparsable; already recorded above
        report.rows.push(row(None, None, ComparisonOutcome::Missing));
        return;
    };
    let current_str = current_str.to_string();

    let latest_str = match registry.latest_version(&dep.name).await {
        Ok(latest) => latest,
        Err(e) => {
            report.violations.push(Violation::FetchFailed {
                name: dep.name.clone(),
                message: e.to_string(),
            });
            report.rows.push(row(
                Some(current_str),
                None,
                ComparisonOutcome::FetchError,
            ));
            return;
        }
    };

    let latest = match SemanticVersion::parse(&latest_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            report.violations.push(Violation::FetchFailed {
                name: dep.name.clone(),
                message: e.to_string(),
            });
            report.rows.push(row(
                Some(current_str),
                None,
                ComparisonOutcome::FetchError,
            ));
            return;
        }
    };

    let is_outdated = latest > current;
    let should_fail = dep.fail_on_update && is_outdated && !mode.is_advisory();
    let outcome = if is_outdated {
        if should_fail {
            ComparisonOutcome::OutdatedFail
        } else {
            ComparisonOutcome::OutdatedWarn
        }
    } else {
        // equal, or a local override ahead of the registry
        ComparisonOutcome::UpToDate
    };

    if should_fail {
        report.violations.push(Violation::OutdatedDependency {
            name: dep.name.clone(),
            current: current_str.clone(),
            latest: latest_str.clone(),
        });
    }

    report
        .rows
        .push(row(Some(current_str), Some(latest_str), outcome));
}
