//! European Monte Carlo pricer.

use rayon::prelude::*;
use tracing::debug;

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::{ExerciseStyle, VanillaOption};

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use crate::pricer::{require_style, OptionPricer};
use crate::rng::PricerRng;

/// Normal draws per independent random stream.
const CHUNK_DRAWS: usize = 16_384;

/// Monte Carlo estimate with its sampling error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult { price: 10.45, std_error: 0.02, n_samples: 500_000 };
/// assert!((result.confidence_95() - 0.0392).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of independent samples averaged (antithetic pairs count once).
    pub n_samples: usize,
}

impl PricingResult {
    /// Half-width of the 95% confidence interval.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Running sums of a sample.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SampleStats {
    pub(crate) sum: f64,
    pub(crate) sum_sq: f64,
    pub(crate) count: usize,
}

impl SampleStats {
    #[inline]
    pub(crate) fn push(&mut self, x: f64) {
        self.sum += x;
        self.sum_sq += x * x;
        self.count += 1;
    }

    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            count: self.count + other.count,
        }
    }

    pub(crate) fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    /// Standard error of the mean.
    pub(crate) fn std_error(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let variance = ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// European option pricer sampling the exact lognormal terminal spot.
///
/// `S_T = S0·exp((r - q - σ²/2)T + σ√T·Z)`. Draws are split into fixed-size
/// chunks, each with its own stream derived from the run seed, and the
/// chunks are reduced in parallel; the estimate depends only on the seed.
///
/// With antithetic variates `⌈n_paths/2⌉` normals are drawn and each is
/// evaluated as `Z` and `-Z`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_pricing::OptionPricer;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(200_000)
///     .antithetic(true)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
///
/// let price = pricer.price(&call, &market).unwrap();
/// assert!((price - 10.4506).abs() < 0.1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices and reports the standard error of the estimate.
    ///
    /// # Errors
    /// `PricingError::UnsupportedInstrument` for American options.
    pub fn price_with_error(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<PricingResult, PricingError> {
        require_style("Monte Carlo", option, ExerciseStyle::European)?;

        let seed = self.config.seed().unwrap_or_else(rand::random);
        let antithetic = self.config.antithetic();
        let draws = if antithetic {
            self.config.n_paths().div_ceil(2)
        } else {
            self.config.n_paths()
        };

        let maturity = option.maturity();
        let spot = market.spot();
        let drift = market.log_drift() * maturity;
        let diffusion = market.volatility() * maturity.sqrt();
        let terminal = |z: f64| spot * (drift + diffusion * z).exp();

        let n_chunks = draws.div_ceil(CHUNK_DRAWS);
        let stats = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let mut rng = PricerRng::for_stream(seed, chunk as u64);
                let len = CHUNK_DRAWS.min(draws - chunk * CHUNK_DRAWS);
                let mut stats = SampleStats::default();
                for _ in 0..len {
                    let z = rng.gen_normal();
                    let sample = if antithetic {
                        0.5 * (option.payoff(terminal(z)) + option.payoff(terminal(-z)))
                    } else {
                        option.payoff(terminal(z))
                    };
                    stats.push(sample);
                }
                stats
            })
            .reduce(SampleStats::default, SampleStats::merge);

        let discount = market.discount_factor(maturity);
        let result = PricingResult {
            price: discount * stats.mean(),
            std_error: discount * stats.std_error(),
            n_samples: stats.count,
        };

        debug!(
            paths = self.config.n_paths(),
            antithetic,
            seed,
            price = result.price,
            std_error = result.std_error,
            "monte carlo valuation"
        );
        Ok(result)
    }
}

impl OptionPricer for MonteCarloPricer {
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        Ok(self.price_with_error(option, market)?.price)
    }

    /// Draws one seed for an unseeded pricer; seeded pricers are unchanged.
    fn freeze(
        &self,
        _option: &VanillaOption<f64>,
        _market: &Market<f64>,
    ) -> Result<Option<Self>, PricingError> {
        Ok(match self.config.seed() {
            Some(_) => None,
            None => Some(Self {
                config: self.config.with_seed(Some(rand::random())),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::BlackScholes;
    use pricer_models::instruments::OptionType;

    fn pricer(n_paths: usize, antithetic: bool, seed: Option<u64>) -> MonteCarloPricer {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .antithetic(antithetic)
            .maybe_seed(seed)
            .build()
            .unwrap();
        MonteCarloPricer::new(config).unwrap()
    }

    fn market(q: f64) -> Market<f64> {
        Market::new(100.0, 0.05, 0.2, q).unwrap()
    }

    #[test]
    fn test_matches_black_scholes() {
        let mc = pricer(300_000, true, Some(11));
        for q in [0.0, 0.03] {
            let m = market(q);
            let bs = BlackScholes::from_market(&m).unwrap();
            for option_type in [OptionType::Call, OptionType::Put] {
                let option = VanillaOption::european(100.0, 1.0, option_type).unwrap();
                let result = mc.price_with_error(&option, &m).unwrap();
                let exact = bs.price(100.0, 1.0, option_type);
                assert!(
                    (result.price - exact).abs() < 4.0 * result.std_error,
                    "{:?} q={} mc={} bs={}",
                    option_type,
                    q,
                    result.price,
                    exact
                );
                assert!(result.std_error > 0.0 && result.std_error < 0.05);
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let option = VanillaOption::european(95.0, 0.5, OptionType::Put).unwrap();
        let a = pricer(50_000, false, Some(99)).price(&option, &market(0.0)).unwrap();
        let b = pricer(50_000, false, Some(99)).price(&option, &market(0.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_antithetic_sample_count() {
        let option = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let even = pricer(1_000, true, Some(1)).price_with_error(&option, &market(0.0)).unwrap();
        let odd = pricer(1_001, true, Some(1)).price_with_error(&option, &market(0.0)).unwrap();
        let plain = pricer(1_000, false, Some(1)).price_with_error(&option, &market(0.0)).unwrap();
        assert_eq!(even.n_samples, 500);
        assert_eq!(odd.n_samples, 501);
        assert_eq!(plain.n_samples, 1_000);
    }

    #[test]
    fn test_unseeded_runs_still_converge() {
        let option = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let price = pricer(200_000, true, None).price(&option, &market(0.0)).unwrap();
        assert_relative_eq!(price, 10.4506, epsilon = 0.15);
    }

    #[test]
    fn test_freeze_pins_a_seed_once() {
        let option = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
        let m = market(0.0);

        let frozen = pricer(10_000, true, None).freeze(&option, &m).unwrap().unwrap();
        assert!(frozen.config().seed().is_some());
        assert_eq!(frozen.price(&option, &m).unwrap(), frozen.price(&option, &m).unwrap());

        assert!(pricer(10_000, true, Some(4)).freeze(&option, &m).unwrap().is_none());
    }

    #[test]
    fn test_rejects_american() {
        let option = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let result = pricer(1_000, false, Some(1)).price(&option, &market(0.0));
        assert!(matches!(result, Err(PricingError::UnsupportedInstrument(_))));
    }

    #[test]
    fn test_sample_stats() {
        let mut stats = SampleStats::default();
        for x in [1.0, 2.0, 3.0, 4.0] {
            stats.push(x);
        }
        assert_relative_eq!(stats.mean(), 2.5, epsilon = 1e-15);
        // sample variance 5/3, std error sqrt(5/12)
        assert_relative_eq!(stats.std_error(), (5.0_f64 / 12.0).sqrt(), epsilon = 1e-12);

        let merged = stats.merge(SampleStats::default());
        assert_eq!(merged.count, 4);
    }
}
