//! Core domain models for depgate
//!
//! This module contains the fundamental types used throughout the engine:
//! - Semantic version parsing and precedence ordering
//! - Advisory-scan evidence structures
//! - Allowlist policy and watch-list configuration
//! - Violations and per-dependency freshness outcomes

mod advisory;
mod outcome;
mod policy;
mod version;
mod violation;
mod watchlist;

pub use advisory::{
    AdvisoryPackage, AdvisoryReport, AdvisoryWarning, Vulnerability, VulnerabilityList,
    WarningAdvisory, WarningPackage, WarningSet,
};
pub use outcome::{ComparisonOutcome, RunMode, WatchRow};
pub use policy::{AllowlistEntry, PolicyConfig, PolicyMetadata, DEFAULT_REVIEW_WINDOW_DAYS};
pub use version::{ParseFailure, SemanticVersion};
pub use violation::Violation;
pub use watchlist::{WatchList, WatchedDependency};
