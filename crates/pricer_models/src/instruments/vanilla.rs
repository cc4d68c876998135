//! Vanilla option definitions.

use num_traits::Float;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::params::InstrumentParams;
use super::payoff::{OptionType, Payoff};

/// Single-asset vanilla option.
///
/// The payoff is derived from the option type and strike at construction
/// and re-derived whenever a perturbed copy is made.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ExerciseStyle, OptionType, VanillaOption};
///
/// let call = VanillaOption::european(100.0_f64, 1.0, OptionType::Call).unwrap();
/// assert_eq!(call.payoff(110.0), 10.0);
///
/// let shorter = call.with_maturity(0.8).unwrap();
/// assert_eq!(shorter.maturity(), 0.8);
/// assert_eq!(call.maturity(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float> {
    params: InstrumentParams<T>,
    option_type: OptionType,
    exercise_style: ExerciseStyle,
    payoff: Payoff<T>,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a validated option.
    ///
    /// # Errors
    /// [`InstrumentError`] if strike or maturity is not strictly positive.
    pub fn new(
        strike: T,
        maturity: T,
        option_type: OptionType,
        exercise_style: ExerciseStyle,
    ) -> Result<Self, InstrumentError> {
        let params = InstrumentParams::new(strike, maturity)?;
        Ok(Self::from_params(params, option_type, exercise_style))
    }

    /// Creates an option from already validated parameters.
    pub fn from_params(
        params: InstrumentParams<T>,
        option_type: OptionType,
        exercise_style: ExerciseStyle,
    ) -> Self {
        Self {
            params,
            option_type,
            exercise_style,
            payoff: Payoff::new(option_type, params.strike()),
        }
    }

    /// European option.
    pub fn european(
        strike: T,
        maturity: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        Self::new(strike, maturity, option_type, ExerciseStyle::European)
    }

    /// American option.
    pub fn american(
        strike: T,
        maturity: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        Self::new(strike, maturity, option_type, ExerciseStyle::American)
    }

    /// Copy of this option with a different maturity.
    pub fn with_maturity(&self, maturity: T) -> Result<Self, InstrumentError> {
        Self::new(self.strike(), maturity, self.option_type, self.exercise_style)
    }

    /// Payoff at the given spot, which is also the early-exercise value.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.payoff.evaluate(spot)
    }

    /// Returns the payoff.
    #[inline]
    pub fn payoff_fn(&self) -> &Payoff<T> {
        &self.payoff
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.params.maturity()
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.option_type.is_call()
    }
}
