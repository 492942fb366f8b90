//! Policy violations
//!
//! Every failure either gate can raise, aggregated across one run and
//! reported together. Variants carry enough context to render the exact
//! operator-facing message.

use chrono::NaiveDate;
use std::fmt;

/// A single policy violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A known vulnerability; the allowlist can never waive these
    Vulnerability {
        id: String,
        package: String,
        version: String,
    },
    /// An advisory warning the scanner emitted without an advisory id
    WarningWithoutId { package: String },
    /// An advisory warning with no matching allowlist entry
    UnreviewedAdvisory { id: String, package: String },
    /// An allowlist entry with no review deadline
    MissingReviewDate { id: String },
    /// Review deadline set further out than the policy window allows
    ReviewWindowExceeded {
        id: String,
        review_by: NaiveDate,
        window_days: u32,
        latest_allowed: NaiveDate,
    },
    /// Review deadline already passed
    ExceptionExpired { id: String, review_by: NaiveDate },
    /// Allowlist entry whose advisory no longer appears in scan output
    StaleAllowlistEntry { id: String },
    /// Watched crate absent from the resolved dependency graph
    NotInGraph { name: String },
    /// Resolved graph carries a version string outside the version grammar
    UnparsableGraphVersion { name: String, version: String },
    /// Registry lookup failed for a watched crate
    FetchFailed { name: String, message: String },
    /// Watched crate is behind the registry and marked fail_on_update
    OutdatedDependency {
        name: String,
        current: String,
        latest: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Vulnerability {
                id,
                package,
                version,
            } => {
                write!(f, "vulnerability {id} affects {package} {version}")
            }
            Violation::WarningWithoutId { package } => {
                write!(f, "warning without advisory id for {package}")
            }
            Violation::UnreviewedAdvisory { id, package } => {
                write!(f, "unreviewed advisory {id} ({package})")
            }
            Violation::MissingReviewDate { id } => {
                write!(f, "policy entry {id} missing review_by date")
            }
            Violation::ReviewWindowExceeded {
                id,
                review_by,
                window_days,
                latest_allowed,
            } => {
                write!(
                    f,
                    "policy entry {id} review_by {review_by} exceeds {window_days} day window ({latest_allowed})"
                )
            }
            Violation::ExceptionExpired { id, review_by } => {
                write!(f, "policy entry {id} expired on {review_by}")
            }
            Violation::StaleAllowlistEntry { id } => {
                write!(
                    f,
                    "stale allowlist entry {id} is no longer present in audit output"
                )
            }
            Violation::NotInGraph { name } => {
                write!(f, "crate '{name}' was not found in current Cargo graph")
            }
            Violation::UnparsableGraphVersion { name, version } => {
                write!(
                    f,
                    "crate '{name}' resolves to unparsable version '{version}'"
                )
            }
            Violation::FetchFailed { name, message } => {
                write!(f, "failed to fetch latest version for '{name}' ({message})")
            }
            Violation::OutdatedDependency {
                name,
                current,
                latest,
            } => {
                write!(
                    f,
                    "{name} is outdated ({current} -> {latest}); fail_on_update is enabled"
                )
            }
        }
    }
}
