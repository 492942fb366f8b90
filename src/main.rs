//! depgate - dependency governance gate CLI
//!
//! Two gates over a project's third-party dependency set:
//! - `depgate audit`: zero-tolerance vulnerability gate with a time-boxed
//!   exception process for lesser advisories
//! - `depgate watch`: freshness check of curated dependencies against
//!   crates.io, strict or advisory

use clap::Parser;
use depgate::cli::{CliArgs, GateCommand};
use depgate::runner::{AuditRunner, WatchRunner};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("depgate: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let exit_code = match args.command {
        GateCommand::Audit(audit_args) => AuditRunner::new(audit_args).run()?,
        GateCommand::Watch(watch_args) => WatchRunner::new(watch_args).run().await?,
    };
    Ok(exit_code)
}
