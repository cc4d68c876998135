//! The pricing contract shared by every valuation method.

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, VanillaOption};

/// A method that values a vanilla option in a market snapshot.
///
/// Implementations must be free of shared mutable state so that the
/// finite-difference engine can reprice perturbed scenarios concurrently.
/// Closures with the same signature implement the trait, which makes ad hoc
/// pricers easy to plug into a Greek calculator.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_core::types::PricingError;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::OptionPricer;
///
/// let intrinsic =
///     |option: &VanillaOption<f64>, market: &Market<f64>| -> Result<f64, PricingError> {
///         Ok(option.payoff(market.spot()))
///     };
///
/// let call = VanillaOption::european(90.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// assert_eq!(intrinsic.price(&call, &market).unwrap(), 10.0);
/// ```
pub trait OptionPricer: Send + Sync {
    /// Present value of `option` under `market`.
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError>;

    /// A copy of this pricer fixed for repricing bumped copies of `option`
    /// around `market`, or `None` when repricings are already consistent.
    ///
    /// Simulation pricers pin one random stream so every bumped scenario
    /// sees the same draws; the LSM pricer also fixes its exercise policy
    /// to the one fitted at `market`.
    fn freeze(
        &self,
        _option: &VanillaOption<f64>,
        _market: &Market<f64>,
    ) -> Result<Option<Self>, PricingError>
    where
        Self: Sized,
    {
        Ok(None)
    }
}

impl<F> OptionPricer for F
where
    F: Fn(&VanillaOption<f64>, &Market<f64>) -> Result<f64, PricingError> + Send + Sync,
{
    #[inline]
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        self(option, market)
    }
}

/// Fails with `UnsupportedInstrument` unless `option` has the given style.
pub(crate) fn require_style(
    method: &str,
    option: &VanillaOption<f64>,
    style: ExerciseStyle,
) -> Result<(), PricingError> {
    if option.exercise_style() == style {
        Ok(())
    } else {
        Err(PricingError::UnsupportedInstrument(format!(
            "{} supports {} options only, got {}",
            method,
            style,
            option.exercise_style()
        )))
    }
}
