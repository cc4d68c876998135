//! Longstaff–Schwartz Monte Carlo pricer for American options.

use std::sync::Arc;

use tracing::{debug, trace};

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, VanillaOption};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::pricer::{PricingResult, SampleStats};
use super::regression::{fit_quadratic, QuadraticFit};
use crate::pricer::{require_style, OptionPricer};
use crate::rng::PricerRng;

/// Regression-based American option pricer.
///
/// Simulates `n_paths` lognormal paths on `n_steps` equal steps. Cash flows
/// start at the terminal payoff and are rolled back one step at a time; at
/// each interior date the discounted cash flows of in-the-money paths are
/// regressed on `1, x, x²` with `x = S/K`, and a path exercises when its
/// intrinsic value strictly exceeds the fitted continuation value.
///
/// Steps where the regression is ill-posed (fewer than three in-the-money
/// paths or a singular normal matrix) make no exercise decision.
///
/// [`freeze`](OptionPricer::freeze) returns a copy that replays the fitted
/// continuation values instead of regressing again, which keeps the
/// exercise boundary fixed across finite-difference scenarios.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::mc::{LsmMonteCarloPricer, MonteCarloConfig};
/// use pricer_pricing::OptionPricer;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .n_steps(50)
///     .seed(7)
///     .build()
///     .unwrap();
/// let pricer = LsmMonteCarloPricer::new(config).unwrap();
///
/// let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let price = pricer.price(&put, &market).unwrap();
/// assert!(price > 5.6 && price < 6.4);
/// ```
#[derive(Clone, Debug)]
pub struct LsmMonteCarloPricer {
    config: MonteCarloConfig,
    policy: Option<Arc<ExercisePolicy>>,
}

/// Continuation fit per exercise date, indexed by step; `None` where no
/// exercise decision was made.
#[derive(Debug)]
struct ExercisePolicy {
    fits: Vec<Option<QuadraticFit>>,
}

impl LsmMonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            policy: None,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Whether exercise decisions come from a policy fitted by an earlier run.
    #[inline]
    pub fn has_fixed_policy(&self) -> bool {
        self.policy.is_some()
    }

    /// Prices and reports the standard error across paths.
    ///
    /// # Errors
    /// `PricingError::UnsupportedInstrument` for European options.
    pub fn price_with_error(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<PricingResult, PricingError> {
        let seed = self.config.seed().unwrap_or_else(rand::random);
        let (result, _) = self.run(option, market, seed)?;
        Ok(result)
    }

    fn run(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
        seed: u64,
    ) -> Result<(PricingResult, ExercisePolicy), PricingError> {
        require_style("LSM Monte Carlo", option, ExerciseStyle::American)?;

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let dt = option.maturity() / n_steps as f64;
        let discount = market.discount_factor(dt);

        let spots = simulate_paths(market, dt, n_paths, n_steps, self.config.antithetic(), seed);
        let at = |step: usize| &spots[(step - 1) * n_paths..step * n_paths];

        let mut cash_flows: Vec<f64> = at(n_steps).iter().map(|&s| option.payoff(s)).collect();
        let mut fits = vec![None; n_steps];

        let strike = option.strike();
        let mut skipped = 0usize;
        for step in (1..n_steps).rev() {
            for cf in cash_flows.iter_mut() {
                *cf *= discount;
            }

            let step_spots = at(step);
            let itm: Vec<usize> = (0..n_paths)
                .filter(|&i| option.payoff(step_spots[i]) > 0.0)
                .collect();

            let fit = match &self.policy {
                Some(policy) => policy.fits.get(step).copied().flatten(),
                None => {
                    fit_quadratic(itm.iter().map(|&i| (step_spots[i] / strike, cash_flows[i])))
                }
            };
            let Some(fit) = fit else {
                skipped += 1;
                trace!(step, itm = itm.len(), "no exercise decision at this step");
                continue;
            };
            fits[step] = Some(fit);

            for &i in &itm {
                let exercise = option.payoff(step_spots[i]);
                if exercise > fit.eval(step_spots[i] / strike) {
                    cash_flows[i] = exercise;
                }
            }
        }

        let mut stats = SampleStats::default();
        for cf in &cash_flows {
            stats.push(discount * cf);
        }

        let result = PricingResult {
            price: stats.mean(),
            std_error: stats.std_error(),
            n_samples: stats.count,
        };

        debug!(
            paths = n_paths,
            steps = n_steps,
            seed,
            skipped,
            fixed_policy = self.policy.is_some(),
            price = result.price,
            std_error = result.std_error,
            "lsm valuation"
        );
        Ok((result, ExercisePolicy { fits }))
    }
}

impl OptionPricer for LsmMonteCarloPricer {
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        Ok(self.price_with_error(option, market)?.price)
    }

    /// Fits the exercise policy at `market` and pins it with the seed.
    ///
    /// Bumped scenarios then differ only through their paths, not through a
    /// refitted exercise boundary.
    fn freeze(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<Option<Self>, PricingError> {
        if self.policy.is_some() {
            return Ok(None);
        }
        let seed = self.config.seed().unwrap_or_else(rand::random);
        let (_, policy) = self.run(option, market, seed)?;
        Ok(Some(Self {
            config: self.config.with_seed(Some(seed)),
            policy: Some(Arc::new(policy)),
        }))
    }
}

/// Simulates spot paths, stored step-major: `spots[(t - 1) * n_paths + i]`
/// holds path `i` at step `t` for `t` in `1..=n_steps`.
fn simulate_paths(
    market: &Market<f64>,
    dt: f64,
    n_paths: usize,
    n_steps: usize,
    antithetic: bool,
    seed: u64,
) -> Vec<f64> {
    let mut rng = PricerRng::from_seed(seed);
    let drift = market.log_drift() * dt;
    let diffusion = market.volatility() * dt.sqrt();

    let mut spots = vec![0.0; n_paths * n_steps];
    let mut previous = vec![market.spot(); n_paths];

    for step in 0..n_steps {
        let row = &mut spots[step * n_paths..(step + 1) * n_paths];
        let mut i = 0;
        while i < n_paths {
            let z = rng.gen_normal();
            row[i] = previous[i] * (drift + diffusion * z).exp();
            if antithetic && i + 1 < n_paths {
                row[i + 1] = previous[i + 1] * (drift - diffusion * z).exp();
                i += 2;
            } else {
                i += 1;
            }
        }
        previous.copy_from_slice(row);
    }

    spots
}
