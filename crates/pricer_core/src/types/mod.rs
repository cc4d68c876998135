//! Core error types.
//!
//! [`PricingError`] is the single error surfaced by every pricer and Greek
//! calculator; lower-level validation errors convert into it.

pub mod error;

pub use error::PricingError;
