//! CLI argument parsing module for depgate

use crate::domain::RunMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default policy file location relative to the project directory
pub const DEFAULT_POLICY_FILE: &str = "security/rustsec-policy.json";

/// Default watch-list location relative to the project directory
pub const DEFAULT_WATCH_FILE: &str = "security/dependency-watch.json";

/// Dependency governance gate
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depgate",
    version,
    about = "Dependency governance gate: advisory policy enforcement and freshness watch"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: GateCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GateCommand {
    /// Enforce the advisory allowlist policy against vulnerability-scan evidence
    Audit(AuditArgs),
    /// Compare watched dependencies against the newest published crate versions
    Watch(WatchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    /// Project directory containing the dependency graph and policy files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Override the advisory policy file location
    #[arg(long)]
    pub policy: Option<PathBuf>,
}

impl AuditArgs {
    /// Effective policy file path
    pub fn policy_path(&self) -> PathBuf {
        self.policy
            .clone()
            .unwrap_or_else(|| self.path.join(DEFAULT_POLICY_FILE))
    }
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Project directory containing the dependency graph and watch-list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Override the watch-list file location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Advisory mode: report findings without affecting the exit status
    #[arg(long)]
    pub no_fail: bool,

    /// Disable progress display
    #[arg(short, long)]
    pub quiet: bool,
}

impl WatchArgs {
    /// Effective watch-list file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.path.join(DEFAULT_WATCH_FILE))
    }

    /// Run mode selected by the flags
    pub fn mode(&self) -> RunMode {
        if self.no_fail {
            RunMode::Advisory
        } else {
            RunMode::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(args)
    }

    #[test]
    fn test_audit_defaults() {
        let args = parse(&["depgate", "audit"]);
        let GateCommand::Audit(audit) = args.command else {
            panic!("expected audit subcommand");
        };
        assert_eq!(audit.path, PathBuf::from("."));
        assert_eq!(
            audit.policy_path(),
            PathBuf::from("./security/rustsec-policy.json")
        );
    }

    #[test]
    fn test_audit_policy_override() {
        let args = parse(&["depgate", "audit", "/repo", "--policy", "/tmp/policy.json"]);
        let GateCommand::Audit(audit) = args.command else {
            panic!("expected audit subcommand");
        };
        assert_eq!(audit.path, PathBuf::from("/repo"));
        assert_eq!(audit.policy_path(), PathBuf::from("/tmp/policy.json"));
    }

    #[test]
    fn test_watch_defaults() {
        let args = parse(&["depgate", "watch"]);
        let GateCommand::Watch(watch) = args.command else {
            panic!("expected watch subcommand");
        };
        assert!(!watch.no_fail);
        assert!(!watch.quiet);
        assert_eq!(watch.mode(), RunMode::Strict);
        assert_eq!(
            watch.config_path(),
            PathBuf::from("./security/dependency-watch.json")
        );
    }

    #[test]
    fn test_watch_no_fail_selects_advisory_mode() {
        let args = parse(&["depgate", "watch", "--no-fail"]);
        let GateCommand::Watch(watch) = args.command else {
            panic!("expected watch subcommand");
        };
        assert!(watch.no_fail);
        assert_eq!(watch.mode(), RunMode::Advisory);
    }

    #[test]
    fn test_watch_config_override_and_quiet() {
        let args = parse(&[
            "depgate",
            "watch",
            "/repo",
            "--config",
            "/tmp/watch.json",
            "-q",
        ]);
        let GateCommand::Watch(watch) = args.command else {
            panic!("expected watch subcommand");
        };
        assert_eq!(watch.path, PathBuf::from("/repo"));
        assert_eq!(watch.config_path(), PathBuf::from("/tmp/watch.json"));
        assert!(watch.quiet);
    }
}
