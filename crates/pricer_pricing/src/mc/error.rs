//! Error types for pricer configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error raised when a pricer is built with invalid settings.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside `[1, max]`.
    #[error("Invalid path count {count}: must be in range [1, {max}]")]
    InvalidPathCount {
        /// Requested path count
        count: usize,
        /// Largest accepted path count
        max: usize,
    },

    /// Step count outside `[1, max]`.
    #[error("Invalid step count {count}: must be in range [1, {max}]")]
    InvalidStepCount {
        /// Requested step count
        count: usize,
        /// Largest accepted step count
        max: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
