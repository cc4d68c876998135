//! greekcalc - Command Line Option Pricing and Greeks
//!
//! Operational entry point for the pricing engines.
//!
//! # Commands
//!
//! - `greekcalc price` - Price one option with one method
//! - `greekcalc greeks` - Price and compute the eight Greeks
//! - `greekcalc compare` - Tabulate every applicable method for a call and a put
//! - `greekcalc check` - Print the resolved configuration
//!
//! Settings come from `greekcalc.toml` (or `--config`) and are overridden by
//! command-line flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_pricing::selection::GreekMethod;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use args::{BumpArgs, MethodArgs, OptionArgs, OutputFormat, SettingsArgs};
use config::CliConfig;

/// Option pricing and Greeks calculator
#[derive(Parser)]
#[command(name = "greekcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./greekcalc.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option
    Price {
        #[command(flatten)]
        option: OptionArgs,

        #[command(flatten)]
        method: MethodArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Price an option and compute its Greeks
    Greeks {
        #[command(flatten)]
        option: OptionArgs,

        #[command(flatten)]
        method: MethodArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Greek method (analytic, finite-difference)
        #[arg(short, long, default_value = "analytic")]
        greek_method: GreekMethod,

        #[command(flatten)]
        bumps: BumpArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Compare every applicable method on a call and a put
    Compare {
        #[command(flatten)]
        option: OptionArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        bumps: BumpArgs,

        /// Also tabulate Greeks per method
        #[arg(short, long)]
        greeks: bool,
    },

    /// Check the resolved configuration
    Check,
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.logging.level.as_filter_str()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Price {
            option,
            method,
            settings,
            format,
        } => commands::price::run(&option, &method, settings.apply(config.pricing), format),
        Commands::Greeks {
            option,
            method,
            settings,
            greek_method,
            bumps,
            format,
        } => commands::greeks::run(
            &option,
            &method,
            greek_method,
            settings.apply(config.pricing),
            bumps.apply(config.bumps)?,
            format,
        ),
        Commands::Compare {
            option,
            settings,
            bumps,
            greeks,
        } => commands::compare::run(
            &option,
            settings.apply(config.pricing),
            bumps.apply(config.bumps)?,
            greeks,
        ),
        Commands::Check => commands::check::run(&config, cli.config.as_deref()),
    }
}
