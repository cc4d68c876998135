//! Instrument validation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument construction errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike must be strictly positive and finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike
        strike: f64,
    },

    /// Maturity must be strictly positive and finite.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity in years
        maturity: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
