//! Numerical pricers against the closed form.
//!
//! # Test Categories
//!
//! 1. **Binomial convergence**: tree error shrinks with step count
//! 2. **Monte Carlo convergence**: RMSE over fixed seeds shrinks with paths
//! 3. **Variance reduction**: antithetic pairs beat plain sampling
//! 4. **Greeks**: finite differences through the closed form

use approx::assert_abs_diff_eq;
use pricer_core::market_data::Market;
use pricer_models::instruments::{OptionType, VanillaOption};
use pricer_pricing::analytical::BlackScholesPricer;
use pricer_pricing::greeks::{AnalyticGreeks, BumpSizes, FiniteDifferenceGreeks, GreekCalculator};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::tree::BinomialTreePricer;
use pricer_pricing::OptionPricer;

fn market() -> Market<f64> {
    Market::new(100.0, 0.05, 0.2, 0.0).unwrap()
}

fn mc_pricer(n_paths: usize, antithetic: bool, seed: u64) -> MonteCarloPricer {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .antithetic(antithetic)
        .seed(seed)
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap()
}

fn sample_variance(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

// ============================================================================
// Binomial Tree
// ============================================================================

#[test]
fn test_binomial_error_decreases_with_steps() {
    let m = market();
    for option_type in [OptionType::Call, OptionType::Put] {
        let option = VanillaOption::european(100.0, 1.0, option_type).unwrap();
        let exact = BlackScholesPricer.price(&option, &m).unwrap();

        let errors: Vec<f64> = [50, 500, 5000]
            .iter()
            .map(|&steps| {
                let tree = BinomialTreePricer::new(steps).unwrap();
                (tree.price(&option, &m).unwrap() - exact).abs()
            })
            .collect();

        assert!(errors[2] < errors[1], "{:?}", errors);
        assert!(errors[1] < errors[0], "{:?}", errors);
        // 0.1% of spot at 2000+ steps
        assert!(errors[2] < 0.1);
    }
}

#[test]
fn test_binomial_with_dividend_yield() {
    let m = market().with_dividend_yield(0.03).unwrap();
    let tree = BinomialTreePricer::new(2000).unwrap();

    let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
    let put = VanillaOption::european(100.0, 1.0, OptionType::Put).unwrap();
    assert_abs_diff_eq!(tree.price(&call, &m).unwrap(), 8.65252855394271, epsilon = 5e-3);
    assert_abs_diff_eq!(tree.price(&put, &m).unwrap(), 6.7309176491633, epsilon = 5e-3);
}

// ============================================================================
// Monte Carlo
// ============================================================================

#[test]
fn test_monte_carlo_rmse_decreases_with_paths() {
    let m = market();
    let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
    let exact = BlackScholesPricer.price(&call, &m).unwrap();

    let rmse = |n_paths: usize| {
        let mse = (0..16u64)
            .map(|seed| {
                let price = mc_pricer(n_paths, false, 1_000 + seed).price(&call, &m).unwrap();
                (price - exact).powi(2)
            })
            .sum::<f64>()
            / 16.0;
        mse.sqrt()
    };

    let coarse = rmse(20_000);
    let medium = rmse(80_000);
    let fine = rmse(320_000);
    assert!(fine < medium, "rmse 320k={} 80k={}", fine, medium);
    assert!(medium < coarse, "rmse 80k={} 20k={}", medium, coarse);
}

#[test]
fn test_antithetic_reduces_variance() {
    let m = market();
    // deep in the money, the payoff is close to linear in Z
    let call = VanillaOption::european(70.0, 1.0, OptionType::Call).unwrap();

    let prices = |antithetic: bool| -> Vec<f64> {
        (0..50u64)
            .map(|seed| mc_pricer(10_000, antithetic, seed).price(&call, &m).unwrap())
            .collect()
    };

    let plain = sample_variance(&prices(false));
    let paired = sample_variance(&prices(true));
    assert!(paired < plain, "antithetic={} plain={}", paired, plain);
}

#[test]
fn test_monte_carlo_put_call_parity() {
    let m = market().with_dividend_yield(0.02).unwrap();
    let pricer = mc_pricer(400_000, true, 99);
    let call = VanillaOption::european(105.0, 0.5, OptionType::Call).unwrap();
    let put = VanillaOption::european(105.0, 0.5, OptionType::Put).unwrap();

    let c = pricer.price_with_error(&call, &m).unwrap();
    let p = pricer.price_with_error(&put, &m).unwrap();
    let forward = 100.0 * m.dividend_factor(0.5) - 105.0 * m.discount_factor(0.5);
    assert!((c.price - p.price - forward).abs() < 4.0 * (c.std_error + p.std_error));
}

// ============================================================================
// Greeks
// ============================================================================

#[test]
fn test_finite_difference_matches_analytic() {
    let fd = FiniteDifferenceGreeks::new(BlackScholesPricer, BumpSizes::default()).unwrap();
    for (strike, maturity) in [(90.0, 0.5), (100.0, 1.0), (115.0, 2.0)] {
        for q in [0.0, 0.03] {
            let m = market().with_dividend_yield(q).unwrap();
            for option_type in [OptionType::Call, OptionType::Put] {
                let option = VanillaOption::european(strike, maturity, option_type).unwrap();
                let numeric = fd.compute(&option, &m).unwrap();
                let exact = AnalyticGreeks.compute(&option, &m).unwrap();

                assert_abs_diff_eq!(numeric.delta, exact.delta, epsilon = 1e-3);
                assert_abs_diff_eq!(numeric.gamma, exact.gamma, epsilon = 1e-4);
                assert_abs_diff_eq!(numeric.vega, exact.vega, epsilon = 1e-2);
                assert_abs_diff_eq!(numeric.vanna, exact.vanna, epsilon = 1e-2);
            }
        }
    }
}
