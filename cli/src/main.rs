//! Health Planner CLI
//!
//! Computes BMI, calorie targets, a weight projection and a meal plan from
//! biometric input, and keeps the last report on disk.

use anyhow::Result;
use clap::Parser;
use health_planner_cli::{cli::Cli, commands, config::AppConfig};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        report_path = %config.storage.report_path.display(),
        "Starting Health Planner"
    );

    let json = cli.command.wants_json();
    match commands::run(cli.command, &config).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(code = err.code(), "{}", err);
            if json {
                println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            } else {
                eprintln!("error: {}", err.user_message());
            }
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
