//! Closed-form pricing.
//!
//! Wraps the generic [`pricer_models::analytical::BlackScholes`] model as an
//! [`OptionPricer`](crate::OptionPricer).

mod black_scholes;

pub use black_scholes::BlackScholesPricer;
