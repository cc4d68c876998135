//! # pricer_core: Foundation layer of the option pricing engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - The crate-wide error type [`types::PricingError`]
//! - The immutable market snapshot [`market_data::Market`]
//! - The generic [`traits::Float`] bound used by the closed-form models
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates and only a minimal
//! set of external ones:
//! - num-traits: generic floating-point arithmetic
//! - thiserror: error derives
//! - serde: serialisation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::Market;
//!
//! let market = Market::new(100.0_f64, 0.05, 0.20, 0.0).unwrap();
//! let bumped = market.with_spot(100.5).unwrap();
//!
//! assert_eq!(market.spot(), 100.0);
//! assert_eq!(bumped.spot(), 100.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`market_data::Market`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
