//! Closed-form Greeks.

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::VanillaOption;

use super::{GreekCalculator, GreekResult};

/// Black–Scholes Greeks from the closed-form expressions.
///
/// European exercise only.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::greeks::{AnalyticGreeks, GreekCalculator};
///
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let greeks = AnalyticGreeks.compute(&call, &market).unwrap();
/// assert!((greeks.vega - 37.5240346916938).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyticGreeks;

impl GreekCalculator for AnalyticGreeks {
    fn compute(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<GreekResult, PricingError> {
        let greeks = BlackScholes::from_market(market)?.greeks_option(option)?;
        Ok(greeks.into())
    }
}
