//! Advisory policy evaluation
//!
//! Applies the allowlist policy to a vulnerability-scan report. Evaluation
//! is exhaustive: every violation is collected in one pass so operators fix
//! everything in a single review cycle. Pure over its inputs; the current
//! date is supplied by the caller.

use crate::domain::{AdvisoryReport, PolicyConfig, Violation};
use chrono::{Days, NaiveDate};
use std::collections::HashSet;

/// Evaluates the scan report against the policy as of `today`
///
/// Ordering is stable: vulnerabilities in report order, then warnings in
/// unmaintained/unsound/notice order, then stale allowlist entries in
/// policy-file order.
pub fn evaluate(
    report: &AdvisoryReport,
    policy: &PolicyConfig,
    today: NaiveDate,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Known vulnerabilities are unconditional; the allowlist only covers
    // the lesser warning categories.
    for vulnerability in &report.vulnerabilities.list {
        violations.push(Violation::Vulnerability {
            id: vulnerability.id.clone(),
            package: vulnerability.package.name.clone(),
            version: vulnerability.package.version.clone(),
        });
    }

    let window_days = policy.max_review_window_days();
    let latest_allowed = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    for warning in report.advisory_warnings() {
        let package = warning.package_name().to_string();
        let Some(id) = warning.advisory_id() else {
            violations.push(Violation::WarningWithoutId { package });
            continue;
        };
        let Some(entry) = policy.entry(id) else {
            violations.push(Violation::UnreviewedAdvisory {
                id: id.to_string(),
                package,
            });
            continue;
        };
        let Some(review_by) = entry.review_by else {
            violations.push(Violation::MissingReviewDate { id: id.to_string() });
            continue;
        };
        if review_by > latest_allowed {
            violations.push(Violation::ReviewWindowExceeded {
                id: id.to_string(),
                review_by,
                window_days,
                latest_allowed,
            });
        }
        if review_by < today {
            violations.push(Violation::ExceptionExpired {
                id: id.to_string(),
                review_by,
            });
        }
    }

    // Allowlist hygiene: entries for advisories resolved upstream must go.
    let present_ids: HashSet<&str> = report
        .advisory_warnings()
        .filter_map(|w| w.advisory_id())
        .collect();
    for entry in &policy.allow {
        if !present_ids.contains(entry.id.as_str()) {
            violations.push(Violation::StaleAllowlistEntry {
                id: entry.id.clone(),
            });
        }
    }

    violations
}
