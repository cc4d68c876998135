//! Pricer-agnostic finite-difference Greeks.
//!
//! Every sensitivity is a fixed central stencil over repricings of bumped
//! copies of the market and instrument:
//!
//! | Greek | Stencil |
//! |-------|---------|
//! | delta | `(f(S+h) − f(S−h)) / 2h` |
//! | gamma | `(−f(S+2h) + 16f(S+h) − 30V₀ + 16f(S−h) − f(S−2h)) / 12h²` |
//! | vega, rho | `(−f(x+2h) + 8f(x+h) − 8f(x−h) + f(x−2h)) / 12h` |
//! | theta | minus the vega stencil over maturity |
//! | vomma | gamma stencil over volatility |
//! | vanna | `(f(S+h,σ+h) − f(S−h,σ+h) − f(S+h,σ−h) + f(S−h,σ−h)) / 4hₛhᵥ` |
//! | zomma | `(Γ(σ+h) − Γ(σ−h)) / 2h` with Γ the gamma stencil |
//!
//! The stencils share points, so one full Greek vector costs 25 distinct
//! repricings. Each is priced once; by default the set is fanned out across
//! the rayon pool.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, trace};

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

use super::{GreekCalculator, GreekResult};
use crate::mc::ConfigError;
use crate::pricer::OptionPricer;

/// Bump sizes for the finite-difference stencils.
///
/// All four are absolute: `spot` in price units, `volatility` and `rate` in
/// decimal units, `maturity` in years.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::BumpSizes;
///
/// let bumps = BumpSizes::default();
/// assert_eq!(bumps.spot, 0.5);
/// assert_eq!(bumps.volatility, 0.01);
///
/// assert!(BumpSizes::new(0.0, 0.01, 0.2, 0.1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BumpSizes {
    /// Spot bump `hS`.
    pub spot: f64,
    /// Volatility bump `hV`.
    pub volatility: f64,
    /// Maturity bump `hT`.
    pub maturity: f64,
    /// Rate bump `hR`.
    pub rate: f64,
}

impl Default for BumpSizes {
    fn default() -> Self {
        Self {
            spot: 0.5,
            volatility: 0.01,
            maturity: 0.2,
            rate: 0.1,
        }
    }
}

impl BumpSizes {
    /// Creates validated bump sizes.
    pub fn new(
        spot: f64,
        volatility: f64,
        maturity: f64,
        rate: f64,
    ) -> Result<Self, ConfigError> {
        let bumps = Self {
            spot,
            volatility,
            maturity,
            rate,
        };
        bumps.validate()?;
        Ok(bumps)
    }

    /// Checks that every bump is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spot bump", self.spot),
            ("volatility bump", self.volatility),
            ("maturity bump", self.maturity),
            ("rate bump", self.rate),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value: format!("{} must be positive and finite", value),
                });
            }
        }
        Ok(())
    }
}

/// Multiples of each bump defining one repricing scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Shift {
    spot: i8,
    vol: i8,
    maturity: i8,
    rate: i8,
}

const fn shift(spot: i8, vol: i8, maturity: i8, rate: i8) -> Shift {
    Shift {
        spot,
        vol,
        maturity,
        rate,
    }
}

const BASE: Shift = shift(0, 0, 0, 0);

/// Every distinct point the stencils touch.
const SCENARIOS: [Shift; 25] = [
    BASE,
    // spot ladder
    shift(-2, 0, 0, 0),
    shift(-1, 0, 0, 0),
    shift(1, 0, 0, 0),
    shift(2, 0, 0, 0),
    // volatility ladder
    shift(0, -2, 0, 0),
    shift(0, -1, 0, 0),
    shift(0, 1, 0, 0),
    shift(0, 2, 0, 0),
    // maturity ladder
    shift(0, 0, -2, 0),
    shift(0, 0, -1, 0),
    shift(0, 0, 1, 0),
    shift(0, 0, 2, 0),
    // rate ladder
    shift(0, 0, 0, -2),
    shift(0, 0, 0, -1),
    shift(0, 0, 0, 1),
    shift(0, 0, 0, 2),
    // spot ladders at σ ± hV (vanna corners, zomma)
    shift(-2, -1, 0, 0),
    shift(-1, -1, 0, 0),
    shift(1, -1, 0, 0),
    shift(2, -1, 0, 0),
    shift(-2, 1, 0, 0),
    shift(-1, 1, 0, 0),
    shift(1, 1, 0, 0),
    shift(2, 1, 0, 0),
];

/// Finite-difference Greek engine wrapping any [`OptionPricer`].
///
/// Before repricing, the wrapped pricer is [frozen](OptionPricer::freeze)
/// at the base scenario: Monte Carlo pricers share one random stream across
/// all 25 repricings, seeded or not, so the differences are taken over common
/// random numbers, and LSM keeps the base exercise policy.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::analytical::BlackScholesPricer;
/// use pricer_pricing::greeks::{BumpSizes, FiniteDifferenceGreeks, GreekCalculator};
///
/// let engine = FiniteDifferenceGreeks::new(BlackScholesPricer, BumpSizes::default()).unwrap();
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let greeks = engine.compute(&call, &market).unwrap();
/// assert!((greeks.delta - 0.6368).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct FiniteDifferenceGreeks<P> {
    pricer: P,
    bumps: BumpSizes,
    parallel: bool,
}

impl<P: OptionPricer> FiniteDifferenceGreeks<P> {
    /// Wraps `pricer` with the given bump sizes.
    pub fn new(pricer: P, bumps: BumpSizes) -> Result<Self, ConfigError> {
        bumps.validate()?;
        Ok(Self {
            pricer,
            bumps,
            parallel: true,
        })
    }

    /// Enables or disables parallel repricing of the scenarios.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The wrapped pricer.
    pub fn pricer(&self) -> &P {
        &self.pricer
    }

    /// The bump sizes.
    pub fn bumps(&self) -> &BumpSizes {
        &self.bumps
    }

    fn check_bumps(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<(), PricingError> {
        let h = &self.bumps;
        let checks = [
            ("spot", market.spot(), h.spot),
            ("volatility", market.volatility(), h.volatility),
            ("maturity", option.maturity(), h.maturity),
        ];
        for (name, value, bump) in checks {
            if value - 2.0 * bump <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "{} bump {} too large for {} {}: stencil reaches a non-positive value",
                    name, bump, name, value
                )));
            }
        }
        Ok(())
    }

    fn scenario(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
        s: Shift,
    ) -> Result<(VanillaOption<f64>, Market<f64>), PricingError> {
        let h = &self.bumps;
        let mut bumped = *market;
        if s.spot != 0 {
            bumped = bumped.with_spot(market.spot() + f64::from(s.spot) * h.spot)?;
        }
        if s.vol != 0 {
            bumped =
                bumped.with_volatility(market.volatility() + f64::from(s.vol) * h.volatility)?;
        }
        if s.rate != 0 {
            bumped = bumped.with_rate(market.rate() + f64::from(s.rate) * h.rate)?;
        }
        let instrument = if s.maturity != 0 {
            option.with_maturity(option.maturity() + f64::from(s.maturity) * h.maturity)?
        } else {
            *option
        };
        Ok((instrument, bumped))
    }

    fn reprice(
        &self,
        pricer: &P,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
        s: Shift,
    ) -> Result<(Shift, f64), PricingError> {
        let (option, market) = self.scenario(option, market, s)?;
        let value = pricer.price(&option, &market)?;
        trace!(?s, value, "finite-difference scenario");
        Ok((s, value))
    }

    fn price_scenarios(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<HashMap<Shift, f64>, PricingError> {
        let frozen = self.pricer.freeze(option, market)?;
        let pricer = frozen.as_ref().unwrap_or(&self.pricer);

        if self.parallel {
            SCENARIOS
                .par_iter()
                .map(|&s| self.reprice(pricer, option, market, s))
                .collect()
        } else {
            SCENARIOS
                .iter()
                .map(|&s| self.reprice(pricer, option, market, s))
                .collect()
        }
    }
}

impl<P: OptionPricer> GreekCalculator for FiniteDifferenceGreeks<P> {
    fn compute(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<GreekResult, PricingError> {
        self.check_bumps(option, market)?;
        let values = self.price_scenarios(option, market)?;
        let f = |s: Shift| values.get(&s).copied().unwrap_or(f64::NAN);
        let h = &self.bumps;

        let first = |axis: fn(i8) -> Shift, step: f64| {
            (-f(axis(2)) + 8.0 * f(axis(1)) - 8.0 * f(axis(-1)) + f(axis(-2))) / (12.0 * step)
        };
        let second = |axis: &dyn Fn(i8) -> Shift, step: f64| {
            (-f(axis(2)) + 16.0 * f(axis(1)) - 30.0 * f(axis(0)) + 16.0 * f(axis(-1))
                - f(axis(-2)))
                / (12.0 * step * step)
        };
        let gamma_at = |vol: i8| second(&|k| shift(k, vol, 0, 0), h.spot);

        let gamma_up = gamma_at(1);
        let gamma_down = gamma_at(-1);

        let result = GreekResult {
            delta: (f(shift(1, 0, 0, 0)) - f(shift(-1, 0, 0, 0))) / (2.0 * h.spot),
            gamma: gamma_at(0),
            vega: first(|k| shift(0, k, 0, 0), h.volatility),
            theta: -first(|k| shift(0, 0, k, 0), h.maturity),
            rho: first(|k| shift(0, 0, 0, k), h.rate),
            vanna: (f(shift(1, 1, 0, 0)) - f(shift(-1, 1, 0, 0)) - f(shift(1, -1, 0, 0))
                + f(shift(-1, -1, 0, 0)))
                / (4.0 * h.spot * h.volatility),
            vomma: second(&|k| shift(0, k, 0, 0), h.volatility),
            zomma: (gamma_up - gamma_down) / (2.0 * h.volatility),
        };

        if !result.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "finite-difference Greeks are not finite: {:?}",
                result
            )));
        }

        debug!(
            base = f(BASE),
            delta = result.delta,
            gamma = result.gamma,
            parallel = self.parallel,
            "finite-difference greeks"
        );
        Ok(result)
    }
}
