//! Market data error types.

use crate::types::PricingError;
use thiserror::Error;

/// Market snapshot validation errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidSpot { spot: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Spot must be strictly positive.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Volatility must be strictly positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Dividend yield must be non-negative.
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield
        dividend_yield: f64,
    },

    /// A field is NaN or infinite.
    #[error("Non-finite market field: {field}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
