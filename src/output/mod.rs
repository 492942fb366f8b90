//! Output rendering for gate results
//!
//! This module provides:
//! - Text output for human-readable report lines and verdicts
//! - An append-only markdown summary artifact for CI step summaries

mod summary;
mod text;

pub use summary::{SummaryArtifact, SUMMARY_ENV};
pub use text::TextReport;
