//! Watch runner: load watch-list, enumerate the graph, fetch, render
//!
//! Every watched dependency gets a report row regardless of outcome. In
//! advisory mode violations are printed as warnings and the exit status
//! stays 0; strict mode fails the run.

use crate::cli::WatchArgs;
use crate::domain::WatchList;
use crate::error::GateError;
use crate::evidence::{CargoEvidence, EvidenceSource};
use crate::output::{SummaryArtifact, TextReport};
use crate::progress::Progress;
use crate::registry::{CratesIoRegistry, HttpClient};
use crate::watch::check;
use chrono::Utc;
use std::io::{self, Write};
use std::process::ExitCode;

pub struct WatchRunner {
    args: WatchArgs,
}

impl WatchRunner {
    pub fn new(args: WatchArgs) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<ExitCode, GateError> {
        let watchlist = WatchList::load(&self.args.config_path())?;
        let evidence = CargoEvidence::new(&self.args.path);
        let resolved = evidence.resolved_versions()?;

        let client = HttpClient::new()?;
        let registry = CratesIoRegistry::new(client);
        let mode = self.args.mode();

        let progress = Progress::new(!self.args.quiet, watchlist.dependencies.len() as u64);
        let report = check(
            &watchlist.dependencies,
            &resolved,
            &registry,
            mode,
            &progress,
        )
        .await;
        progress.finish_and_clear();

        let renderer = TextReport::new();
        let mut stdout = io::stdout().lock();
        renderer.render_watch_rows(mode, &report.rows, &mut stdout)?;

        if let Some(artifact) = SummaryArtifact::from_env() {
            artifact.append_watch(mode, Utc::now(), &report.rows, &report.violations)?;
        }

        if !report.has_violations() {
            renderer.render_watch_pass(&mut stdout)?;
            stdout.flush()?;
            return Ok(ExitCode::SUCCESS);
        }

        if mode.is_advisory() {
            let mut stderr = io::stderr().lock();
            renderer.render_advisory_warnings(&report.violations, &mut stderr)?;
            stderr.flush()?;
            writeln!(stdout, "depgate: completed with warnings (non-blocking)")?;
            stdout.flush()?;
            return Ok(ExitCode::SUCCESS);
        }

        let mut stderr = io::stderr().lock();
        renderer.render_violations("depgate: strict check failed", &report.violations, &mut stderr)?;
        stderr.flush()?;
        Ok(ExitCode::FAILURE)
    }
}
