//! One-call valuation helpers.
//!
//! These combine [`pricer_for`] and [`greek_calculator_for`] with the
//! pricing call, for callers that only hold method tags and settings.

use tracing::debug;

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

use crate::greeks::{BumpSizes, GreekCalculator, GreekResult};
use crate::pricer::OptionPricer;
use crate::selection::{
    greek_calculator_for, pricer_for, GreekMethod, PricerSettings, PricingMethod,
};

/// Price and Greeks of one option under one pair of methods.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Method used for the price.
    pub pricing_method: PricingMethod,
    /// Method used for the Greeks.
    pub greek_method: GreekMethod,
    /// Present value.
    pub price: f64,
    /// Sensitivities.
    pub greeks: GreekResult,
}

/// Prices `option` with `method`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::engine;
/// use pricer_pricing::selection::PricerSettings;
///
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let method = "bs".parse().unwrap();
/// let price = engine::price(&call, &market, method, &PricerSettings::default()).unwrap();
/// assert!((price - 10.4506).abs() < 1e-4);
/// ```
pub fn price(
    option: &VanillaOption<f64>,
    market: &Market<f64>,
    method: PricingMethod,
    settings: &PricerSettings,
) -> Result<f64, PricingError> {
    pricer_for(method, settings)?.price(option, market)
}

/// Computes the Greeks of `option`.
pub fn compute_greeks(
    option: &VanillaOption<f64>,
    market: &Market<f64>,
    greek_method: GreekMethod,
    pricing_method: PricingMethod,
    bumps: BumpSizes,
    settings: &PricerSettings,
) -> Result<GreekResult, PricingError> {
    greek_calculator_for(greek_method, pricing_method, bumps, settings)?.compute(option, market)
}

/// Prices `option` and computes its Greeks.
///
/// Fails as a whole if either part fails; there is no partial result.
pub fn evaluate(
    option: &VanillaOption<f64>,
    market: &Market<f64>,
    pricing_method: PricingMethod,
    greek_method: GreekMethod,
    bumps: BumpSizes,
    settings: &PricerSettings,
) -> Result<Valuation, PricingError> {
    let price = price(option, market, pricing_method, settings)?;
    let greeks = compute_greeks(option, market, greek_method, pricing_method, bumps, settings)?;
    debug!(
        %pricing_method,
        %greek_method,
        price,
        delta = greeks.delta,
        "evaluated option"
    );
    Ok(Valuation {
        pricing_method,
        greek_method,
        price,
        greeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pricer_models::instruments::OptionType;

    fn market() -> Market<f64> {
        Market::new(100.0, 0.05, 0.2, 0.0).unwrap()
    }

    #[test]
    fn test_evaluate_closed_form() {
        let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let valuation = evaluate(
            &call,
            &market(),
            PricingMethod::BlackScholes,
            GreekMethod::Analytic,
            BumpSizes::default(),
            &PricerSettings::default(),
        )
        .unwrap();

        assert_abs_diff_eq!(valuation.price, 10.4505835721856, epsilon = 1e-4);
        assert_abs_diff_eq!(valuation.greeks.delta, 0.636830651175619, epsilon = 1e-4);
        assert_eq!(valuation.pricing_method, PricingMethod::BlackScholes);
    }

    #[test]
    fn test_evaluate_american_with_tree() {
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let settings = PricerSettings::default().with_binomial_steps(400);
        let valuation = evaluate(
            &put,
            &market(),
            PricingMethod::Binomial,
            GreekMethod::FiniteDifference,
            BumpSizes::default(),
            &settings,
        )
        .unwrap();

        assert!(valuation.price > 6.0 && valuation.price < 6.2);
        assert!(valuation.greeks.delta < 0.0);
    }

    #[test]
    fn test_evaluate_fails_without_partial_result() {
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let result = evaluate(
            &put,
            &market(),
            PricingMethod::Binomial,
            GreekMethod::Analytic,
            BumpSizes::default(),
            &PricerSettings::default().with_binomial_steps(100),
        );
        assert!(matches!(result, Err(PricingError::UnsupportedInstrument(_))));
    }

    #[test]
    fn test_price_rejects_unsupported_pair() {
        let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let settings = PricerSettings::default().with_lsm_paths(100).with_lsm_steps(2);
        let err = price(&call, &market(), PricingMethod::LsmMonteCarlo, &settings).unwrap_err();
        assert!(err.is_unsupported());
    }
}
