//! Audit runner: load policy, obtain scan evidence, evaluate, render
//!
//! Structural errors (missing policy, failed scanner invocation) abort with
//! exit 1 before any evaluation. Violations are aggregated, all reported
//! together, then fail the run.

use crate::audit::evaluate;
use crate::cli::AuditArgs;
use crate::domain::PolicyConfig;
use crate::error::GateError;
use crate::evidence::{CargoEvidence, EvidenceSource};
use crate::output::TextReport;
use chrono::Utc;
use std::io::{self, Write};
use std::process::ExitCode;

pub struct AuditRunner {
    args: AuditArgs,
}

impl AuditRunner {
    pub fn new(args: AuditArgs) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Result<ExitCode, GateError> {
        let policy = PolicyConfig::load(&self.args.policy_path())?;
        let evidence = CargoEvidence::new(&self.args.path);
        let report = evidence.advisory_report()?;
        let today = Utc::now().date_naive();

        let violations = evaluate(&report, &policy, today);
        let renderer = TextReport::new();

        if violations.is_empty() {
            let mut stdout = io::stdout().lock();
            renderer.render_audit_pass(
                report.advisory_warnings().count(),
                today,
                policy.max_review_window_days(),
                &mut stdout,
            )?;
            stdout.flush()?;
            return Ok(ExitCode::SUCCESS);
        }

        let mut stderr = io::stderr().lock();
        renderer.render_violations("depgate: policy check failed", &violations, &mut stderr)?;
        stderr.flush()?;
        Ok(ExitCode::FAILURE)
    }
}
