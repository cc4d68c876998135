//! Market data for a single valuation.
//!
//! The engine works under constant-parameter Black–Scholes dynamics, so the
//! whole market state is one flat snapshot: spot, risk-free rate,
//! volatility and continuous dividend yield.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::Market;
//!
//! let market = Market::new(100.0_f64, 0.05, 0.20, 0.03).unwrap();
//! let vol_up = market.with_volatility(0.21).unwrap();
//!
//! assert_eq!(market.volatility(), 0.20);
//! assert_eq!(vol_up.volatility(), 0.21);
//! assert_eq!(vol_up.dividend_yield(), 0.03);
//! ```

pub mod error;
pub mod market;

pub use error::MarketDataError;
pub use market::Market;
