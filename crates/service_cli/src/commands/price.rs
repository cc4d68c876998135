//! Price command implementation

use pricer_pricing::selection::{pricer_for, Pricer, PricerSettings};
use pricer_pricing::OptionPricer;
use serde::Serialize;
use tracing::info;

use crate::args::{MethodArgs, OptionArgs, OutputFormat};
use crate::output::describe;
use crate::Result;

#[derive(Serialize)]
struct PriceReport {
    method: String,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    std_error: Option<f64>,
}

/// Run the price command
pub fn run(
    option: &OptionArgs,
    method: &MethodArgs,
    settings: PricerSettings,
    format: OutputFormat,
) -> Result<()> {
    let market = option.market()?;
    let contract = option.option()?;
    info!(method = %method.method, "pricing {}", describe(&contract, &market));

    let pricer = pricer_for(method.method, &settings)?;
    let (price, std_error) = match &pricer {
        Pricer::MonteCarlo(mc) => {
            let result = mc.price_with_error(&contract, &market)?;
            (result.price, Some(result.std_error))
        }
        Pricer::LsmMonteCarlo(lsm) => {
            let result = lsm.price_with_error(&contract, &market)?;
            (result.price, Some(result.std_error))
        }
        other => (other.price(&contract, &market)?, None),
    };

    match format {
        OutputFormat::Json => {
            let report = PriceReport {
                method: method.method.to_string(),
                price,
                std_error,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}", describe(&contract, &market));
            println!("{:<16} {:.6}", method.method, price);
            if let Some(se) = std_error {
                println!("{:<16} {:.6}", "std error", se);
            }
        }
    }
    Ok(())
}
