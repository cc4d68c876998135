//! Lattice parameters for the CRR tree.

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;

/// Per-step quantities of a recombining CRR lattice.
///
/// - `up = exp(σ√dt)`, `down = 1/up`
/// - `probability = (exp((r − q)dt) − down) / (up − down)`
/// - `discount = exp(−r dt)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeParameters {
    steps: usize,
    dt: f64,
    up: f64,
    down: f64,
    probability: f64,
    discount: f64,
}

impl TreeParameters {
    /// Derives the lattice for `steps` equal steps to `maturity`.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidInput` if `steps` is zero or `maturity` is not
    ///   positive
    /// - `PricingError::NumericalInstability` if the risk-neutral probability
    ///   falls outside `(0, 1)`, which happens when `|r − q|·√dt` exceeds `σ`
    pub fn new(market: &Market<f64>, maturity: f64, steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidInput(
                "binomial tree needs at least one step".to_string(),
            ));
        }
        if !(maturity > 0.0 && maturity.is_finite()) {
            return Err(PricingError::InvalidInput(format!(
                "binomial tree maturity must be positive, got {}",
                maturity
            )));
        }

        let dt = maturity / steps as f64;
        let up = (market.volatility() * dt.sqrt()).exp();
        let down = up.recip();
        let growth = ((market.rate() - market.dividend_yield()) * dt).exp();
        let probability = (growth - down) / (up - down);

        if !(probability > 0.0 && probability < 1.0) {
            return Err(PricingError::NumericalInstability(format!(
                "risk-neutral probability {} outside (0, 1) with {} steps; increase the step count",
                probability, steps
            )));
        }

        Ok(Self {
            steps,
            dt,
            up,
            down,
            probability,
            discount: market.discount_factor(dt),
        })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Length of one step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up move factor.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Down move factor.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One-step discount factor.
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }
}
