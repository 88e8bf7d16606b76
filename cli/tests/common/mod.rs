//! Common test utilities for integration tests
//!
//! Each `TestApp` owns a temporary directory holding its report file, so
//! tests never touch the real data directory or each other.

#![allow(dead_code)]

use clap::Parser;
use health_planner_cli::{
    cli::Cli,
    commands,
    config::AppConfig,
    error::AppResult,
    store::ReportStore,
};
use tempfile::TempDir;

/// Test application wrapper
pub struct TestApp {
    pub config: AppConfig,
    _dir: TempDir,
}

impl TestApp {
    /// Default config with the report path moved into a fresh temp dir
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.report_path = dir.path().join("data").join("last_report.json");

        Self { config, _dir: dir }
    }

    pub fn store(&self) -> ReportStore {
        ReportStore::new(&self.config.storage.report_path)
    }

    /// Parse `args` as a command line and run it against this app's config
    pub async fn run(&self, args: &[&str]) -> AppResult<String> {
        let cli = Cli::try_parse_from(std::iter::once("health-planner").chain(args.iter().copied()))
            .unwrap();
        commands::run(cli.command, &self.config).await
    }
}

/// Arguments for a valid calculation; callers append overrides
pub fn calculate_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "calculate",
        "--age",
        "30",
        "--gender",
        "male",
        "--height",
        "180",
        "--weight",
        "80",
        "--activity-factor",
        "1.55",
    ];
    // A flag already present gets its value replaced (clap rejects repeated
    // single-value flags); anything else is appended.
    let mut rest = extra.iter().copied();
    while let Some(arg) = rest.next() {
        match args.iter().position(|a| *a == arg) {
            Some(i) if arg.starts_with("--") && i + 1 < args.len() => {
                if let Some(value) = rest.next() {
                    args[i + 1] = value;
                }
            }
            _ => args.push(arg),
        }
    }
    args
}
