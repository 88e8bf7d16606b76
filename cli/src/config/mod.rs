//! Configuration management for the Health Planner CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. An explicit `--config` file, when given
//! 4. Environment variables (prefix: HP__)

use anyhow::Result;
use health_planner_shared::{DietCatalog, DEFAULT_PROJECTION_PERIODS};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub presentation: PresentationConfig,
    pub projection: ProjectionConfig,
    /// Left out of the defaults layer so a configured catalog replaces the
    /// built-in one instead of being merged into it entry by entry
    #[serde(default, skip_serializing)]
    pub diet: DietConfig,
}

/// Where the last report is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub report_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when RUST_LOG is unset
    pub level: String,
}

/// Output behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Pause before printing a fresh calculation, in milliseconds
    pub delay_ms: u64,
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    pub periods: usize,
}

/// Meal catalog used for recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DietConfig {
    #[serde(default)]
    pub catalog: DietCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                report_path: PathBuf::from("data/last_report.json"),
            },
            logging: LoggingConfig {
                level: "health_planner_cli=warn".to_string(),
            },
            presentation: PresentationConfig { delay_ms: 0 },
            projection: ProjectionConfig {
                periods: DEFAULT_PROJECTION_PERIODS,
            },
            diet: DietConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. `config_file`, if provided (must exist)
    /// 4. Environment variables with HP__ prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!("config/{}.toml", env);

        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&env_file).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            // Override with environment variables (HP__ prefix)
            // e.g., HP__STORAGE__REPORT_PATH=/tmp/report.json
            .add_source(config::Environment::with_prefix("HP").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.diet.catalog.validate()?;
        Ok(config)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
