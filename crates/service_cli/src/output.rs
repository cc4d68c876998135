//! Text table rendering.

use pricer_core::market_data::Market;
use pricer_models::instruments::VanillaOption;
use pricer_pricing::greeks::GreekResult;

/// One-line summary of the inputs.
pub fn describe(option: &VanillaOption<f64>, market: &Market<f64>) -> String {
    format!(
        "Spot={}, K={}, T={}, r={}, q={}, σ={} ({} {})",
        market.spot(),
        option.strike(),
        option.maturity(),
        market.rate(),
        market.dividend_yield(),
        market.volatility(),
        option.exercise_style(),
        option.option_type(),
    )
}

/// Header row for a Greek table with a leading label column.
pub fn greek_header(label: &str) -> String {
    let mut line = format!("{:<34} {:>12}", label, "Price");
    for name in GreekResult::NAMES {
        line.push_str(&format!(" {:>12}", capitalise(name)));
    }
    line
}

/// One row of a Greek table.
pub fn greek_row(label: &str, price: f64, greeks: &GreekResult) -> String {
    let mut line = format!("{:<34} {:>12.6}", label, price);
    for (_, value) in greeks.iter() {
        line.push_str(&format!(" {:>12.6}", value));
    }
    line
}

/// Horizontal rule matching `header`.
pub fn rule(header: &str) -> String {
    "-".repeat(header.chars().count())
}

fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
