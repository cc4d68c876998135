use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::VanillaOption;

use crate::pricer::OptionPricer;

/// Black–Scholes–Merton closed form with continuous dividend yield.
///
/// European exercise only; American options are rejected with
/// `PricingError::UnsupportedInstrument`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::analytical::BlackScholesPricer;
/// use pricer_pricing::OptionPricer;
///
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let price = BlackScholesPricer.price(&call, &market).unwrap();
/// assert!((price - 10.4505835721856).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlackScholesPricer;

impl BlackScholesPricer {
    /// Creates the pricer.
    pub fn new() -> Self {
        Self
    }
}

impl OptionPricer for BlackScholesPricer {
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        let price = BlackScholes::from_market(market)?.price_option(option)?;
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::NumericalInstability(format!(
                "closed-form price is not finite: {}",
                price
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pricer_models::instruments::OptionType;
    use proptest::prelude::*;

    const TOL: f64 = 1e-4;

    #[test]
    fn test_reference_prices() {
        let pricer = BlackScholesPricer::new();
        let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let put = VanillaOption::european(100.0, 1.0, OptionType::Put).unwrap();

        let flat = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
        assert_abs_diff_eq!(pricer.price(&call, &flat).unwrap(), 10.4505835721856, epsilon = TOL);
        assert_abs_diff_eq!(pricer.price(&put, &flat).unwrap(), 5.57352602225697, epsilon = TOL);

        let dividend = flat.with_dividend_yield(0.03).unwrap();
        assert_abs_diff_eq!(
            pricer.price(&call, &dividend).unwrap(),
            8.65252855394271,
            epsilon = TOL
        );
        assert_abs_diff_eq!(pricer.price(&put, &dividend).unwrap(), 6.7309176491633, epsilon = TOL);
    }

    #[test]
    fn test_rejects_american() {
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
        let err = BlackScholesPricer.price(&put, &market).unwrap_err();
        assert!(err.is_unsupported());
        assert!(err.to_string().contains("american"), "{}", err);
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 50.0..150.0_f64,
            strike in 50.0..150.0_f64,
            maturity in 0.05..3.0_f64,
            rate in -0.02..0.1_f64,
            vol in 0.05..0.8_f64,
            q in 0.0..0.06_f64,
        ) {
            let market = Market::new(spot, rate, vol, q).unwrap();
            let call = VanillaOption::european(strike, maturity, OptionType::Call).unwrap();
            let put = VanillaOption::european(strike, maturity, OptionType::Put).unwrap();

            let c = BlackScholesPricer.price(&call, &market).unwrap();
            let p = BlackScholesPricer.price(&put, &market).unwrap();
            let forward = spot * market.dividend_factor(maturity)
                - strike * market.discount_factor(maturity);
            prop_assert!((c - p - forward).abs() < 1e-6 * spot.max(strike));
        }
    }
}
