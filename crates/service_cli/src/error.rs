//! CLI error types.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors surfaced by `greekcalc`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing or Greek computation failed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration file missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line argument rejected after parsing
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML decoding failure
    #[error("Failed to parse TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// TOML encoding failure
    #[error("Failed to write TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MarketDataError> for CliError {
    fn from(err: MarketDataError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
