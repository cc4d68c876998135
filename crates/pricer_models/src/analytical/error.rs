//! Error types for the closed-form models.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Closed-form pricing errors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-positive spot.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Closed form exists only for European exercise.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Name of the rejected exercise style
        style: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { .. } | AnalyticalError::InvalidSpot { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
        }
    }
}
