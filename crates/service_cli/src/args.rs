//! Shared command-line argument groups.

use clap::{Args, ValueEnum};
use pricer_core::market_data::Market;
use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
use pricer_pricing::greeks::BumpSizes;
use pricer_pricing::selection::{PricerSettings, PricingMethod};

use crate::{CliError, Result};

/// Contract and market inputs.
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Spot price
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Volatility
    #[arg(long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0)]
    pub dividend_yield: f64,

    /// Option type (call, put); `compare` prices both
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Exercise style (european, american)
    #[arg(long, default_value = "european")]
    pub style: ExerciseStyle,
}

impl OptionArgs {
    /// Market snapshot from the flags.
    pub fn market(&self) -> Result<Market<f64>> {
        Ok(Market::new(
            self.spot,
            self.rate,
            self.volatility,
            self.dividend_yield,
        )?)
    }

    /// Option of the requested type.
    pub fn option(&self) -> Result<VanillaOption<f64>> {
        self.option_of(self.option_type)
    }

    /// Option with the flags' contract terms and the given type.
    pub fn option_of(&self, option_type: OptionType) -> Result<VanillaOption<f64>> {
        Ok(VanillaOption::new(
            self.strike,
            self.maturity,
            option_type,
            self.style,
        )?)
    }
}

/// Pricing method selection.
#[derive(Args, Debug, Clone)]
pub struct MethodArgs {
    /// Pricing method (black-scholes, binomial, monte-carlo, lsm-monte-carlo)
    #[arg(short, long, default_value = "black-scholes")]
    pub method: PricingMethod,
}

/// Overrides for the `[pricing]` configuration section.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Binomial tree steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,

    /// Longstaff-Schwartz paths
    #[arg(long)]
    pub lsm_paths: Option<usize>,

    /// Longstaff-Schwartz time steps
    #[arg(long)]
    pub lsm_steps: Option<usize>,

    /// Random seed for the Monte Carlo pricers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable antithetic variates
    #[arg(long)]
    pub no_antithetic: bool,
}

impl SettingsArgs {
    /// Applies the flags that were given on top of `base`.
    pub fn apply(&self, base: PricerSettings) -> PricerSettings {
        let mut settings = base;
        if let Some(steps) = self.steps {
            settings = settings.with_binomial_steps(steps);
        }
        if let Some(paths) = self.paths {
            settings = settings.with_mc_paths(paths);
        }
        if let Some(paths) = self.lsm_paths {
            settings = settings.with_lsm_paths(paths);
        }
        if let Some(steps) = self.lsm_steps {
            settings = settings.with_lsm_steps(steps);
        }
        if self.seed.is_some() {
            settings = settings.with_seed(self.seed);
        }
        if self.no_antithetic {
            settings = settings.with_antithetic(false);
        }
        settings
    }
}

/// Overrides for the `[bumps]` configuration section.
#[derive(Args, Debug, Clone, Default)]
pub struct BumpArgs {
    /// Spot bump
    #[arg(long)]
    pub bump_spot: Option<f64>,

    /// Volatility bump
    #[arg(long)]
    pub bump_vol: Option<f64>,

    /// Maturity bump in years
    #[arg(long)]
    pub bump_maturity: Option<f64>,

    /// Rate bump
    #[arg(long)]
    pub bump_rate: Option<f64>,
}

impl BumpArgs {
    /// Applies the flags that were given on top of `base` and validates.
    pub fn apply(&self, base: BumpSizes) -> Result<BumpSizes> {
        BumpSizes::new(
            self.bump_spot.unwrap_or(base.spot),
            self.bump_vol.unwrap_or(base.volatility),
            self.bump_maturity.unwrap_or(base.maturity),
            self.bump_rate.unwrap_or(base.rate),
        )
        .map_err(|e| CliError::InvalidArgument(e.to_string()))
    }
}

/// Output format for single results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text
    Table,
    /// JSON document
    Json,
}
