//! # Pricer Models (L2: Business Logic)
//!
//! Option instruments and closed-form formulas.
//!
//! This crate provides:
//! - Vanilla option definitions with validated strike and maturity
//! - Terminal payoffs derived from the option right
//! - Black–Scholes prices and Greeks with a continuous dividend yield
//!
//! ## Design Principles
//!
//! - **Value types**: instruments are `Copy`; perturbed copies are rebuilt,
//!   never mutated
//! - **Generic over `T: Float`** for the closed-form layer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
