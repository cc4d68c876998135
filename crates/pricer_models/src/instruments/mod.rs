//! Option instrument definitions.
//!
//! A [`VanillaOption`] combines validated [`InstrumentParams`] (strike and
//! maturity), an [`OptionType`], an [`ExerciseStyle`] and the [`Payoff`]
//! derived from them at construction.
//!
//! # Examples
//! ```
//! use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
//!
//! let put = VanillaOption::american(100.0_f64, 1.0, OptionType::Put).unwrap();
//! assert_eq!(put.exercise_style(), ExerciseStyle::American);
//! assert_eq!(put.payoff(90.0), 10.0);
//! ```

pub mod error;
pub mod exercise;
pub mod params;
pub mod payoff;
pub mod vanilla;

pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use params::InstrumentParams;
pub use payoff::{OptionType, Payoff};
pub use vanilla::VanillaOption;
