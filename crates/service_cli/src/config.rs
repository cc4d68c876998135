//! `greekcalc.toml` configuration.
//!
//! ```toml
//! [pricing]
//! binomial_steps = 2000
//! mc_paths = 1000000
//! antithetic = true
//! lsm_paths = 200000
//! lsm_steps = 50
//! seed = 42
//!
//! [bumps]
//! spot = 0.5
//! volatility = 0.01
//! maturity = 0.2
//! rate = 0.1
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and key is optional.

use std::path::Path;
use std::str::FromStr;

use pricer_pricing::greeks::BumpSizes;
use pricer_pricing::selection::PricerSettings;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Default configuration file, read from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "greekcalc.toml";

/// Log levels accepted in `[logging]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Level as a tracing filter directive.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub pricing: PricerSettings,
    pub bumps: BumpSizes,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when `path` is the implicit default
    /// file and does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Checks bump sizes and step/path counts.
    pub fn validate(&self) -> Result<()> {
        self.bumps
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let p = &self.pricing;
        for (name, value) in [
            ("binomial_steps", p.binomial_steps),
            ("mc_paths", p.mc_paths),
            ("lsm_paths", p.lsm_paths),
            ("lsm_steps", p.lsm_steps),
        ] {
            if value == 0 {
                return Err(CliError::Config(format!("[pricing] {} must be at least 1", name)));
            }
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.pricing.binomial_steps, 2000);
        assert_eq!(config.bumps, BumpSizes::default());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_full_toml() {
        let config = CliConfig::from_toml(
            r#"
            [pricing]
            binomial_steps = 500
            mc_paths = 100000
            antithetic = false
            lsm_paths = 50000
            lsm_steps = 25
            seed = 42

            [bumps]
            spot = 1.0
            volatility = 0.005
            maturity = 0.05
            rate = 0.01

            [logging]
            level = "DEBUG"
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.binomial_steps, 500);
        assert!(!config.pricing.antithetic);
        assert_eq!(config.pricing.seed, Some(42));
        assert_eq!(config.bumps.maturity, 0.05);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
            [pricing]
            mc_paths = 300000
            "#,
        )
        .unwrap();

        assert_eq!(config.pricing.mc_paths, 300_000);
        assert_eq!(config.pricing.lsm_steps, 50);
        assert_eq!(config.pricing.seed, None);
        assert_eq!(config.bumps.spot, 0.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(CliConfig::from_toml("[bumps]\nspot = -1.0\n").is_err());
        assert!(CliConfig::from_toml("[pricing]\nlsm_steps = 0\n").is_err());
        assert!(CliConfig::from_toml("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/greekcalc.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig {
            pricing: PricerSettings::default().with_seed(Some(7)),
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
