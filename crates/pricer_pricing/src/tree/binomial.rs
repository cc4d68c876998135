//! Backward induction on the CRR lattice.

use tracing::debug;

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

use super::params::TreeParameters;
use crate::mc::ConfigError;
use crate::pricer::OptionPricer;

/// Largest accepted number of tree steps.
pub const MAX_TREE_STEPS: usize = 50_000;

/// Cox–Ross–Rubinstein binomial pricer for European and American options.
///
/// Runs in O(steps²) time over a single array of `steps + 1` node values.
/// American nodes take `max(continuation, intrinsic)`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::tree::BinomialTreePricer;
/// use pricer_pricing::OptionPricer;
///
/// let pricer = BinomialTreePricer::new(2000).unwrap();
/// let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let price = pricer.price(&put, &market).unwrap();
/// assert!((price - 6.09).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinomialTreePricer {
    steps: usize,
}

impl BinomialTreePricer {
    /// Creates a pricer with `steps` time steps, in `[1, MAX_TREE_STEPS]`.
    pub fn new(steps: usize) -> Result<Self, ConfigError> {
        if steps == 0 || steps > MAX_TREE_STEPS {
            return Err(ConfigError::InvalidStepCount {
                count: steps,
                max: MAX_TREE_STEPS,
            });
        }
        Ok(Self { steps })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Node spots are built as `S·exp(k·ln u)` with the exponent clamped here so
/// wide lattices neither underflow to zero nor overflow to infinity.
const LOG_MOVE_LIMIT: f64 = 600.0;

/// Standard deviations of terminal log-spot that must fit under the clamp
/// before a call is priced on a clamped lattice.
const MIN_TAIL_SDS: f64 = 10.0;

impl BinomialTreePricer {
    /// Spots of every node in the lattice, indexed by `k` for `(k − steps)` net
    /// up moves. Level `i`, node `j` lives at `k = 2j + steps − i`.
    fn node_spots(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
        params: &TreeParameters,
    ) -> Result<Vec<f64>, PricingError> {
        let steps = params.steps();
        let log_up = params.up().ln();
        let spread = steps as f64 * log_up;

        // Clamping only distorts the upper tail of a call payoff
        if spread > LOG_MOVE_LIMIT && option.is_call() {
            let maturity = option.maturity();
            let volatility = market.volatility();
            let drift = market.rate() - market.dividend_yield() + 0.5 * volatility * volatility;
            let headroom = (LOG_MOVE_LIMIT - drift * maturity) / (volatility * maturity.sqrt());
            if headroom < MIN_TAIL_SDS {
                return Err(PricingError::NumericalInstability(format!(
                    "lattice spans ±{:.0} in log-spot and only {:.1} standard deviations \
                     fit below the representable range",
                    spread, headroom
                )));
            }
        }

        let spot = market.spot();
        Ok((0..=2 * steps)
            .map(|k| {
                let moves = k as f64 - steps as f64;
                spot * (moves * log_up).clamp(-LOG_MOVE_LIMIT, LOG_MOVE_LIMIT).exp()
            })
            .collect())
    }
}

impl OptionPricer for BinomialTreePricer {
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        let params = TreeParameters::new(market, option.maturity(), self.steps)?;
        let steps = params.steps();
        let american = option.exercise_style().allows_early_exercise();
        let spots = self.node_spots(option, market, &params)?;

        let disc_up = params.discount() * params.probability();
        let disc_down = params.discount() * (1.0 - params.probability());

        let mut values: Vec<f64> = (0..=steps).map(|j| option.payoff(spots[2 * j])).collect();

        for level in (0..steps).rev() {
            if american {
                let offset = steps - level;
                for j in 0..=level {
                    let continuation = disc_up.mul_add(values[j + 1], disc_down * values[j]);
                    values[j] = continuation.max(option.payoff(spots[2 * j + offset]));
                }
            } else {
                for j in 0..=level {
                    values[j] = disc_up.mul_add(values[j + 1], disc_down * values[j]);
                }
            }
        }

        let price = values[0];
        debug!(
            steps,
            probability = params.probability(),
            american,
            price,
            "binomial valuation"
        );
        if !price.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "binomial tree produced a non-finite price with {} steps",
                steps
            )));
        }
        Ok(price)
    }
}
