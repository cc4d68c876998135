//! # Pricer Pricing (engines)
//!
//! Numerical valuation of vanilla options and their Greeks on top of the
//! market snapshot from `pricer_core` and the instruments and closed forms
//! from `pricer_models`.
//!
//! ## Pricers
//!
//! Every pricer implements [`OptionPricer`]:
//!
//! | Pricer | Exercise | Module |
//! |--------|----------|--------|
//! | Black–Scholes closed form | European | [`analytical`] |
//! | CRR binomial tree | European, American | [`tree`] |
//! | Monte Carlo (antithetic optional) | European | [`mc`] |
//! | Longstaff–Schwartz Monte Carlo | American | [`mc`] |
//!
//! ## Greeks
//!
//! [`greeks::AnalyticGreeks`] gives closed-form sensitivities for European
//! options. [`greeks::FiniteDifferenceGreeks`] wraps any pricer and produces
//! the same eight sensitivities by central stencils.
//!
//! ## Selection
//!
//! [`selection::pricer_for`] and [`selection::greek_calculator_for`] map
//! method tags to configured strategies; [`engine`] wraps them into
//! one-call helpers.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::Market;
//! use pricer_models::instruments::{OptionType, VanillaOption};
//! use pricer_pricing::greeks::{BumpSizes, GreekCalculator};
//! use pricer_pricing::selection::{
//!     greek_calculator_for, GreekMethod, PricerSettings, PricingMethod,
//! };
//!
//! let put = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
//! let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
//!
//! let settings = PricerSettings::default().with_binomial_steps(500);
//! let calculator = greek_calculator_for(
//!     GreekMethod::FiniteDifference,
//!     PricingMethod::Binomial,
//!     BumpSizes::default(),
//!     &settings,
//! )
//! .unwrap();
//!
//! let greeks = calculator.compute(&put, &market).unwrap();
//! assert!(greeks.delta < 0.0 && greeks.gamma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod greeks;
pub mod mc;
mod pricer;
pub mod rng;
pub mod selection;
pub mod tree;

pub use pricer::OptionPricer;
