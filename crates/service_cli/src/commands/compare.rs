//! Compare command implementation
//!
//! Prices a call and a put under every method that supports the exercise
//! style, and optionally tabulates the Greeks of each method side by side.

use std::time::Instant;

use pricer_core::market_data::Market;
use pricer_models::instruments::{OptionType, VanillaOption};
use pricer_pricing::engine;
use pricer_pricing::greeks::BumpSizes;
use pricer_pricing::selection::{GreekMethod, PricerSettings, PricingMethod};
use tracing::{info, warn};

use crate::args::OptionArgs;
use crate::output::{describe, greek_header, greek_row, rule};
use crate::Result;

fn label(method: PricingMethod) -> &'static str {
    match method {
        PricingMethod::BlackScholes => "Black-Scholes",
        PricingMethod::Binomial => "Binomial",
        PricingMethod::MonteCarlo => "Monte Carlo",
        PricingMethod::LsmMonteCarlo => "Monte Carlo LSM",
    }
}

/// Methods able to value the given contract, in display order.
fn applicable(option: &VanillaOption<f64>) -> Vec<PricingMethod> {
    PricingMethod::ALL
        .into_iter()
        .filter(|m| {
            if option.exercise_style().is_american() {
                m.supports_american()
            } else {
                m.supports_european()
            }
        })
        .collect()
}

/// Greek method and pricer pairs for one contract: closed form first when
/// available, then finite differences through each applicable pricer.
fn greek_rows(option: &VanillaOption<f64>) -> Vec<(String, GreekMethod, PricingMethod)> {
    let mut rows = Vec::new();
    if option.exercise_style().is_european() {
        rows.push((
            "Analytic".to_string(),
            GreekMethod::Analytic,
            PricingMethod::BlackScholes,
        ));
    }
    for method in applicable(option) {
        rows.push((
            format!("FD {}", label(method)),
            GreekMethod::FiniteDifference,
            method,
        ));
    }
    rows
}

fn price_table(
    call: &VanillaOption<f64>,
    put: &VanillaOption<f64>,
    market: &Market<f64>,
    settings: &PricerSettings,
) -> Result<()> {
    let header = format!("{:<20} {:>15} {:>15} {:>12}", "Model", "Call", "Put", "Time (ms)");
    println!("{}", header);
    println!("{}", rule(&header));

    for method in applicable(call) {
        let start = Instant::now();
        let c = engine::price(call, market, method, settings)?;
        let p = engine::price(put, market, method, settings)?;
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!("{:<20} {:>15.6} {:>15.6} {:>12.1}", label(method), c, p, elapsed);
    }
    Ok(())
}

fn greek_table(
    option: &VanillaOption<f64>,
    market: &Market<f64>,
    settings: &PricerSettings,
    bumps: BumpSizes,
) -> Result<()> {
    let header = greek_header("Method");
    println!("{}", header);
    println!("{}", rule(&header));

    for (name, greek_method, pricing_method) in greek_rows(option) {
        match engine::evaluate(option, market, pricing_method, greek_method, bumps, settings) {
            Ok(valuation) => println!("{}", greek_row(&name, valuation.price, &valuation.greeks)),
            Err(err) => {
                warn!(%err, row = %name, "greek row failed");
                println!("{:<34} {}", name, err);
            }
        }
    }
    Ok(())
}

/// Run the compare command
pub fn run(
    option: &OptionArgs,
    settings: PricerSettings,
    bumps: BumpSizes,
    with_greeks: bool,
) -> Result<()> {
    let market = option.market()?;
    let call = option.option_of(OptionType::Call)?;
    let put = option.option_of(OptionType::Put)?;
    info!(style = %call.exercise_style(), "comparing pricing methods");

    println!("{}\n", describe(&call, &market));
    price_table(&call, &put, &market, &settings)?;

    if with_greeks {
        for contract in [&call, &put] {
            println!("\nGreeks - {} {}", contract.exercise_style(), contract.option_type());
            greek_table(contract, &market, &settings, bumps)?;
        }
    }
    Ok(())
}
