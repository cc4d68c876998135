//! Mapping method tags to configured pricers and Greek calculators.
//!
//! Dispatch is static: [`Pricer`] and [`GreekEngine`] are enums over the
//! concrete strategies, so a selected pricer can be wrapped in a
//! [`FiniteDifferenceGreeks`] without boxing.

use std::fmt;
use std::str::FromStr;

use pricer_core::market_data::Market;
use pricer_core::types::PricingError;
use pricer_models::instruments::VanillaOption;

use crate::analytical::BlackScholesPricer;
use crate::greeks::{
    AnalyticGreeks, BumpSizes, FiniteDifferenceGreeks, GreekCalculator, GreekResult,
};
use crate::mc::{LsmMonteCarloPricer, MonteCarloConfig, MonteCarloPricer};
use crate::pricer::OptionPricer;
use crate::tree::BinomialTreePricer;

/// Lowercases and unifies separators so `"Black_Scholes"` and
/// `"black scholes"` read as `"black-scholes"`.
fn normalise(tag: &str) -> String {
    tag.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Option valuation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PricingMethod {
    /// Closed-form Black–Scholes.
    BlackScholes,
    /// CRR binomial tree.
    Binomial,
    /// European Monte Carlo.
    MonteCarlo,
    /// Longstaff–Schwartz American Monte Carlo.
    LsmMonteCarlo,
}

impl PricingMethod {
    /// Every method, in display order.
    pub const ALL: [PricingMethod; 4] = [
        PricingMethod::BlackScholes,
        PricingMethod::Binomial,
        PricingMethod::MonteCarlo,
        PricingMethod::LsmMonteCarlo,
    ];

    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMethod::BlackScholes => "black-scholes",
            PricingMethod::Binomial => "binomial",
            PricingMethod::MonteCarlo => "monte-carlo",
            PricingMethod::LsmMonteCarlo => "lsm-monte-carlo",
        }
    }

    /// Whether the method can value options with early exercise.
    pub fn supports_american(&self) -> bool {
        matches!(self, PricingMethod::Binomial | PricingMethod::LsmMonteCarlo)
    }

    /// Whether the method can value European options.
    pub fn supports_european(&self) -> bool {
        !matches!(self, PricingMethod::LsmMonteCarlo)
    }
}

impl fmt::Display for PricingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "black-scholes" | "blackscholes" | "bs" | "closed-form" => {
                Ok(PricingMethod::BlackScholes)
            }
            "binomial" | "tree" | "crr" => Ok(PricingMethod::Binomial),
            "monte-carlo" | "montecarlo" | "mc" => Ok(PricingMethod::MonteCarlo),
            "lsm-monte-carlo" | "lsmmontecarlo" | "lsm" | "longstaff-schwartz" => {
                Ok(PricingMethod::LsmMonteCarlo)
            }
            _ => Err(PricingError::UnsupportedMethod(format!(
                "unknown pricing method '{}'",
                s
            ))),
        }
    }
}

/// Greek computation method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GreekMethod {
    /// Closed-form Black–Scholes Greeks.
    Analytic,
    /// Finite differences over a pricer.
    FiniteDifference,
}

impl GreekMethod {
    /// Canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            GreekMethod::Analytic => "analytic",
            GreekMethod::FiniteDifference => "finite-difference",
        }
    }
}

impl fmt::Display for GreekMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GreekMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "analytic" | "analytical" | "closed-form" => Ok(GreekMethod::Analytic),
            "finite-difference" | "finitedifference" | "fd" | "bump" => {
                Ok(GreekMethod::FiniteDifference)
            }
            _ => Err(PricingError::UnsupportedMethod(format!(
                "unknown greek method '{}'",
                s
            ))),
        }
    }
}

/// Tunables for the numerical pricers.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::selection::PricerSettings;
///
/// let settings = PricerSettings::default().with_mc_paths(100_000).with_seed(Some(7));
/// assert_eq!(settings.binomial_steps, 2000);
/// assert_eq!(settings.mc_paths, 100_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PricerSettings {
    /// Binomial tree steps.
    pub binomial_steps: usize,
    /// European Monte Carlo paths.
    pub mc_paths: usize,
    /// Antithetic variates for both Monte Carlo pricers.
    pub antithetic: bool,
    /// LSM paths.
    pub lsm_paths: usize,
    /// LSM time steps.
    pub lsm_steps: usize,
    /// Seed shared by the Monte Carlo pricers; `None` draws a fresh one per call.
    pub seed: Option<u64>,
}

impl Default for PricerSettings {
    fn default() -> Self {
        Self {
            binomial_steps: 2000,
            mc_paths: 1_000_000,
            antithetic: true,
            lsm_paths: 200_000,
            lsm_steps: 50,
            seed: None,
        }
    }
}

impl PricerSettings {
    /// Sets the binomial step count.
    pub fn with_binomial_steps(mut self, steps: usize) -> Self {
        self.binomial_steps = steps;
        self
    }

    /// Sets the European Monte Carlo path count.
    pub fn with_mc_paths(mut self, paths: usize) -> Self {
        self.mc_paths = paths;
        self
    }

    /// Enables or disables antithetic variates.
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the LSM path count.
    pub fn with_lsm_paths(mut self, paths: usize) -> Self {
        self.lsm_paths = paths;
        self
    }

    /// Sets the LSM step count.
    pub fn with_lsm_steps(mut self, steps: usize) -> Self {
        self.lsm_steps = steps;
        self
    }

    /// Sets or clears the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// A configured pricer of any supported method.
#[derive(Clone, Debug)]
pub enum Pricer {
    /// Closed form.
    BlackScholes(BlackScholesPricer),
    /// CRR tree.
    Binomial(BinomialTreePricer),
    /// European Monte Carlo.
    MonteCarlo(MonteCarloPricer),
    /// LSM Monte Carlo.
    LsmMonteCarlo(LsmMonteCarloPricer),
}

impl Pricer {
    /// The method this pricer implements.
    pub fn method(&self) -> PricingMethod {
        match self {
            Pricer::BlackScholes(_) => PricingMethod::BlackScholes,
            Pricer::Binomial(_) => PricingMethod::Binomial,
            Pricer::MonteCarlo(_) => PricingMethod::MonteCarlo,
            Pricer::LsmMonteCarlo(_) => PricingMethod::LsmMonteCarlo,
        }
    }
}

impl OptionPricer for Pricer {
    fn price(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<f64, PricingError> {
        match self {
            Pricer::BlackScholes(p) => p.price(option, market),
            Pricer::Binomial(p) => p.price(option, market),
            Pricer::MonteCarlo(p) => p.price(option, market),
            Pricer::LsmMonteCarlo(p) => p.price(option, market),
        }
    }

    fn freeze(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<Option<Self>, PricingError> {
        let frozen = match self {
            Pricer::BlackScholes(_) | Pricer::Binomial(_) => None,
            Pricer::MonteCarlo(p) => p.freeze(option, market)?.map(Pricer::MonteCarlo),
            Pricer::LsmMonteCarlo(p) => p.freeze(option, market)?.map(Pricer::LsmMonteCarlo),
        };
        Ok(frozen)
    }
}

/// A configured Greek calculator of any supported method.
#[derive(Clone, Debug)]
pub enum GreekEngine {
    /// Closed-form Greeks.
    Analytic(AnalyticGreeks),
    /// Finite differences over a selected pricer.
    FiniteDifference(FiniteDifferenceGreeks<Pricer>),
}

impl GreekCalculator for GreekEngine {
    fn compute(
        &self,
        option: &VanillaOption<f64>,
        market: &Market<f64>,
    ) -> Result<GreekResult, PricingError> {
        match self {
            GreekEngine::Analytic(g) => g.compute(option, market),
            GreekEngine::FiniteDifference(g) => g.compute(option, market),
        }
    }
}

/// Builds the pricer for `method` from `settings`.
///
/// # Errors
/// `PricingError::InvalidInput` when a step or path count is out of range.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::Market;
/// use pricer_models::instruments::{OptionType, VanillaOption};
/// use pricer_pricing::selection::{pricer_for, PricerSettings, PricingMethod};
/// use pricer_pricing::OptionPricer;
///
/// let pricer = pricer_for(PricingMethod::Binomial, &PricerSettings::default()).unwrap();
/// let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
/// let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
/// assert!(pricer.price(&put, &market).unwrap() > 6.0);
/// ```
pub fn pricer_for(
    method: PricingMethod,
    settings: &PricerSettings,
) -> Result<Pricer, PricingError> {
    let pricer = match method {
        PricingMethod::BlackScholes => Pricer::BlackScholes(BlackScholesPricer),
        PricingMethod::Binomial => {
            Pricer::Binomial(BinomialTreePricer::new(settings.binomial_steps)?)
        }
        PricingMethod::MonteCarlo => {
            let config = MonteCarloConfig::builder()
                .n_paths(settings.mc_paths)
                .antithetic(settings.antithetic)
                .maybe_seed(settings.seed)
                .build()?;
            Pricer::MonteCarlo(MonteCarloPricer::new(config)?)
        }
        PricingMethod::LsmMonteCarlo => {
            let config = MonteCarloConfig::builder()
                .n_paths(settings.lsm_paths)
                .n_steps(settings.lsm_steps)
                .antithetic(settings.antithetic)
                .maybe_seed(settings.seed)
                .build()?;
            Pricer::LsmMonteCarlo(LsmMonteCarloPricer::new(config)?)
        }
    };
    Ok(pricer)
}

/// Builds the Greek calculator for `greek_method`.
///
/// Finite differences wrap the pricer selected by `pricing_method`;
/// analytic Greeks ignore `pricing_method`, `bumps` and `settings`.
pub fn greek_calculator_for(
    greek_method: GreekMethod,
    pricing_method: PricingMethod,
    bumps: BumpSizes,
    settings: &PricerSettings,
) -> Result<GreekEngine, PricingError> {
    match greek_method {
        GreekMethod::Analytic => Ok(GreekEngine::Analytic(AnalyticGreeks)),
        GreekMethod::FiniteDifference => {
            let pricer = pricer_for(pricing_method, settings)?;
            Ok(GreekEngine::FiniteDifference(FiniteDifferenceGreeks::new(pricer, bumps)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::OptionType;

    #[test]
    fn test_pricing_method_tags() {
        assert_eq!("bs".parse::<PricingMethod>().unwrap(), PricingMethod::BlackScholes);
        assert_eq!("Black_Scholes".parse::<PricingMethod>().unwrap(), PricingMethod::BlackScholes);
        assert_eq!("CRR".parse::<PricingMethod>().unwrap(), PricingMethod::Binomial);
        assert_eq!(" mc ".parse::<PricingMethod>().unwrap(), PricingMethod::MonteCarlo);
        assert_eq!("LSMMonteCarlo".parse::<PricingMethod>().unwrap(), PricingMethod::LsmMonteCarlo);

        for method in PricingMethod::ALL {
            assert_eq!(method.to_string().parse::<PricingMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_tags() {
        let err = "heston".parse::<PricingMethod>().unwrap_err();
        assert!(matches!(err, PricingError::UnsupportedMethod(ref msg) if msg.contains("heston")));
        assert!("adjoint".parse::<GreekMethod>().unwrap_err().is_unsupported());
    }

    #[test]
    fn test_greek_method_tags() {
        assert_eq!("FD".parse::<GreekMethod>().unwrap(), GreekMethod::FiniteDifference);
        assert_eq!(
            "finite difference".parse::<GreekMethod>().unwrap(),
            GreekMethod::FiniteDifference
        );
        assert_eq!("Analytical".parse::<GreekMethod>().unwrap(), GreekMethod::Analytic);
    }

    #[test]
    fn test_exercise_support() {
        assert!(!PricingMethod::BlackScholes.supports_american());
        assert!(PricingMethod::Binomial.supports_american());
        assert!(PricingMethod::Binomial.supports_european());
        assert!(!PricingMethod::LsmMonteCarlo.supports_european());
    }

    #[test]
    fn test_default_settings() {
        let s = PricerSettings::default();
        assert_eq!(s.binomial_steps, 2000);
        assert_eq!(s.mc_paths, 1_000_000);
        assert!(s.antithetic);
        assert_eq!(s.lsm_paths, 200_000);
        assert_eq!(s.lsm_steps, 50);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_pricer_for_each_method() {
        let settings = PricerSettings::default()
            .with_binomial_steps(200)
            .with_mc_paths(2_000)
            .with_lsm_paths(2_000)
            .with_lsm_steps(10)
            .with_seed(Some(1));
        for method in PricingMethod::ALL {
            let pricer = pricer_for(method, &settings).unwrap();
            assert_eq!(pricer.method(), method);
        }
    }

    #[test]
    fn test_pricer_for_rejects_bad_settings() {
        let settings = PricerSettings::default().with_binomial_steps(0);
        let err = pricer_for(PricingMethod::Binomial, &settings).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let settings = PricerSettings::default().with_lsm_steps(0);
        assert!(pricer_for(PricingMethod::LsmMonteCarlo, &settings).is_err());
    }

    #[test]
    fn test_analytic_ignores_pricing_method() {
        let settings = PricerSettings::default().with_lsm_steps(0);
        let engine = greek_calculator_for(
            GreekMethod::Analytic,
            PricingMethod::LsmMonteCarlo,
            BumpSizes::default(),
            &settings,
        )
        .unwrap();
        assert!(matches!(engine, GreekEngine::Analytic(_)));
    }

    #[test]
    fn test_finite_difference_wraps_selected_pricer() {
        let settings = PricerSettings::default().with_binomial_steps(300);
        let engine = greek_calculator_for(
            GreekMethod::FiniteDifference,
            PricingMethod::Binomial,
            BumpSizes::default(),
            &settings,
        )
        .unwrap();
        match &engine {
            GreekEngine::FiniteDifference(fd) => {
                assert_eq!(fd.pricer().method(), PricingMethod::Binomial)
            }
            other => panic!("Expected finite differences, got {:?}", other),
        }

        let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
        let greeks = engine.compute(&put, &market).unwrap();
        assert!(greeks.delta < 0.0);
    }

    #[test]
    fn test_unsupported_combination_surfaces_at_compute() {
        let engine = greek_calculator_for(
            GreekMethod::Analytic,
            PricingMethod::BlackScholes,
            BumpSizes::default(),
            &PricerSettings::default(),
        )
        .unwrap();
        let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
        let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
        assert!(engine.compute(&put, &market).unwrap_err().is_unsupported());
    }
}
