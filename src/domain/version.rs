//! Semantic version parsing and precedence ordering
//!
//! Implements the fixed grammar `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
//! Build metadata is accepted and discarded; it never participates in
//! precedence. Strings outside the grammar are a parse failure, never a
//! silent `0.0.0`.

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.-]+))?(?:\+.*)?$").unwrap()
});

/// Error returned when a string does not match the version grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid semantic version")]
pub struct ParseFailure {
    /// The rejected input string
    pub input: String,
}

impl ParseFailure {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A parsed semantic version
///
/// Ordering follows precedence rules, not string order: numeric fields
/// compare numerically, a release outranks any of its pre-releases, and
/// pre-release identifiers compare identifier-by-identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated pre-release identifiers, in order; empty for a release
    pub prerelease: Vec<String>,
}

impl SemanticVersion {
    /// Parses a version string per the grammar
    pub fn parse(input: &str) -> Result<Self, ParseFailure> {
        let caps = VERSION_RE
            .captures(input)
            .ok_or_else(|| ParseFailure::new(input))?;

        let number = |idx: usize| -> Result<u64, ParseFailure> {
            caps.get(idx)
                .map(|m| m.as_str())
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| ParseFailure::new(input))
        };

        let prerelease = match caps.get(4) {
            Some(m) => {
                let identifiers: Vec<String> = m.as_str().split('.').map(str::to_owned).collect();
                // Identifiers must be non-empty ("1.0.0-a..b" is malformed)
                if identifiers.iter().any(String::is_empty) {
                    return Err(ParseFailure::new(input));
                }
                identifiers
            }
            None => Vec::new(),
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            prerelease,
        })
    }

    /// Returns true for a release version (no pre-release identifiers)
    pub fn is_release(&self) -> bool {
        self.prerelease.is_empty()
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease.join("."))?;
        }
        Ok(())
    }
}

/// Compares two pre-release identifiers
///
/// A numeric identifier compares numerically and is always lower precedence
/// than a non-numeric one; two non-numeric identifiers compare by ordinal
/// character order.
fn compare_identifier(a: &str, b: &str) -> Ordering {
    let a_numeric = !a.is_empty() && a.bytes().all(|c| c.is_ascii_digit());
    let b_numeric = !b.is_empty() && b.bytes().all(|c| c.is_ascii_digit());
    match (a_numeric, b_numeric) {
        (true, true) => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            // Digit runs beyond u64: longer run is the larger number
            _ => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        },
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| {
                match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
                    // A release is newer than any of its pre-releases
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        for (l, r) in self.prerelease.iter().zip(&other.prerelease) {
                            let ord = compare_identifier(l, r);
                            if ord != Ordering::Equal {
                                return ord;
                            }
                        }
                        // Strict prefix: the shorter sequence is lower
                        self.prerelease.len().cmp(&other.prerelease.len())
                    }
                }
            })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
