//! Greek calculators.
//!
//! A [`GreekCalculator`] turns an option and a market snapshot into a full
//! [`GreekResult`]. Two strategies are provided:
//!
//! - [`AnalyticGreeks`]: closed-form Black–Scholes sensitivities, European
//!   exercise only.
//! - [`FiniteDifferenceGreeks`]: central stencils over any
//!   [`OptionPricer`](crate::OptionPricer), including American pricers.

mod analytic;
mod finite_difference;
mod result;


pub use analytic::AnalyticGreeks;
pub use finite_difference::{BumpSizes, FiniteDifferenceGreeks};
pub use result::GreekResult;

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

/// Computes the full Greek vector of an option.
pub trait GreekCalculator: Send + Sync {
    /// Sensitivities of `option` under `market`.
    fn compute(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<GreekResult, PricingError>;
}
