//! Greeks command implementation

use pricer_pricing::engine;
use pricer_pricing::greeks::BumpSizes;
use pricer_pricing::selection::{GreekMethod, PricerSettings};
use tracing::info;

use crate::args::{MethodArgs, OptionArgs, OutputFormat};
use crate::output::{describe, greek_header, greek_row, rule};
use crate::Result;

/// Run the greeks command
pub fn run(
    option: &OptionArgs,
    method: &MethodArgs,
    greek_method: GreekMethod,
    settings: PricerSettings,
    bumps: BumpSizes,
    format: OutputFormat,
) -> Result<()> {
    let market = option.market()?;
    let contract = option.option()?;
    info!(
        method = %method.method,
        %greek_method,
        "computing greeks for {}",
        describe(&contract, &market)
    );

    let valuation = engine::evaluate(
        &contract,
        &market,
        method.method,
        greek_method,
        bumps,
        &settings,
    )?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&valuation)?),
        OutputFormat::Table => {
            let label = format!("{} / {}", method.method, greek_method);
            let header = greek_header("Method");
            println!("{}\n", describe(&contract, &market));
            println!("{}", header);
            println!("{}", rule(&header));
            println!("{}", greek_row(&label, valuation.price, &valuation.greeks));
        }
    }
    Ok(())
}
