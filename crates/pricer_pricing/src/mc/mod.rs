//! Monte Carlo pricers.
//!
//! Two simulators share one configuration type:
//!
//! - [`MonteCarloPricer`] values European options by sampling the terminal
//!   spot exactly from its lognormal law, optionally with antithetic pairs.
//! - [`LsmMonteCarloPricer`] values American options by simulating full
//!   paths and estimating continuation values with a least-squares
//!   regression on `1, x, x²`.
//!
//! ```text
//! MonteCarloConfig  (paths, steps, antithetic, seed)
//! ├── MonteCarloPricer     European, chunked parallel reduction
//! └── LsmMonteCarloPricer  American, backward induction
//!     └── fit_quadratic    normal equations, 3x3 solve
//! ```
//!
//! Results carry the standard error of the estimate through
//! [`PricingResult`]. With a fixed seed both pricers are deterministic,
//! independent of the size of the rayon thread pool.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::market_data::Market;
//! use pricer_models::instruments::{OptionType, VanillaOption};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(200_000)
//!     .antithetic(true)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let call = VanillaOption::european(100.0, 1.0, OptionType::Call).unwrap();
//! let market = Market::new(100.0, 0.05, 0.2, 0.0).unwrap();
//!
//! let result = pricer.price_with_error(&call, &market).unwrap();
//! assert!((result.price - 10.4506).abs() < 4.0 * result.std_error + 1e-3);
//! ```

mod config;
mod error;
mod lsm;
mod pricer;
mod regression;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use lsm::LsmMonteCarloPricer;
pub use pricer::{MonteCarloPricer, PricingResult};
pub use regression::{fit_quadratic, QuadraticFit};
