//! Configuration management for the body metrics CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: BM__)

use anyhow::Result;
use body_metrics_shared::{Gender, UnitSystem};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Form selections used when the command line leaves them out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub gender: Gender,
    pub unit_system: UnitSystem,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable results card
    #[default]
    Text,
    /// Result record as JSON
    Json,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with BM__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., BM__DEFAULTS__UNIT_SYSTEM=imperial sets defaults.unit_system
            .add_source(config::Environment::with_prefix("BM").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.gender, Gender::Male);
        assert_eq!(config.defaults.unit_system, UnitSystem::Metric);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_from_toml() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[defaults]\ngender = \"female\"\nunit_system = \"imperial\"\n\n[output]\nformat = \"json\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.defaults.gender, Gender::Female);
        assert_eq!(config.defaults.unit_system, UnitSystem::Imperial);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.defaults.unit_system, UnitSystem::Metric);
        assert_eq!(config.output.format, OutputFormat::Text);
    }
}
