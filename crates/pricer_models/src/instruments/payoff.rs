//! Option rights and terminal payoffs.

use num_traits::Float;

/// Option right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Lower-case display name.
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(format!("unknown option type '{}'", other)),
        }
    }
}

/// Terminal payoff of a vanilla option.
///
/// Built from an [`OptionType`] and strike; never mutated afterwards.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, Payoff};
///
/// let call = Payoff::new(OptionType::Call, 100.0_f64);
/// assert_eq!(call.evaluate(110.0), 10.0);
/// assert_eq!(call.evaluate(90.0), 0.0);
///
/// let put = Payoff::new(OptionType::Put, 100.0_f64);
/// assert_eq!(put.evaluate(90.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff<T: Float> {
    /// `max(S - K, 0)`
    Call {
        /// Strike price
        strike: T,
    },
    /// `max(K - S, 0)`
    Put {
        /// Strike price
        strike: T,
    },
}

impl<T: Float> Payoff<T> {
    /// Payoff for the given right and strike.
    #[inline]
    pub fn new(option_type: OptionType, strike: T) -> Self {
        match option_type {
            OptionType::Call => Payoff::Call { strike },
            OptionType::Put => Payoff::Put { strike },
        }
    }

    /// Value at expiry for a terminal spot.
    #[inline]
    pub fn evaluate(&self, spot: T) -> T {
        match *self {
            Payoff::Call { strike } => (spot - strike).max(T::zero()),
            Payoff::Put { strike } => (strike - spot).max(T::zero()),
        }
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> T {
        match *self {
            Payoff::Call { strike } | Payoff::Put { strike } => strike,
        }
    }

    /// Option right this payoff belongs to.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        match self {
            Payoff::Call { .. } => OptionType::Call,
            Payoff::Put { .. } => OptionType::Put,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_call_payoff() {
        let call = Payoff::new(OptionType::Call, 100.0_f64);
        assert_eq!(call.evaluate(150.0), 50.0);
        assert_eq!(call.evaluate(100.0), 0.0);
        assert_eq!(call.evaluate(50.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let put = Payoff::new(OptionType::Put, 100.0_f64);
        assert_eq!(put.evaluate(50.0), 50.0);
        assert_eq!(put.evaluate(150.0), 0.0);
    }

    #[test]
    fn test_accessors() {
        let put = Payoff::new(OptionType::Put, 95.0_f64);
        assert_eq!(put.strike(), 95.0);
        assert_eq!(put.option_type(), OptionType::Put);
    }

    #[test]
    fn test_option_type_parse() {
        assert_eq!("CALL".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!("p".parse::<OptionType>(), Ok(OptionType::Put));
        assert!("straddle".parse::<OptionType>().is_err());
    }

    proptest! {
        #[test]
        fn prop_payoff_non_negative(spot in 0.0..1000.0_f64, strike in 1.0..500.0_f64) {
            prop_assert!(Payoff::new(OptionType::Call, strike).evaluate(spot) >= 0.0);
            prop_assert!(Payoff::new(OptionType::Put, strike).evaluate(spot) >= 0.0);
        }

        #[test]
        fn prop_call_minus_put_is_forward(spot in 0.0..1000.0_f64, strike in 1.0..500.0_f64) {
            let call = Payoff::new(OptionType::Call, strike).evaluate(spot);
            let put = Payoff::new(OptionType::Put, strike).evaluate(spot);
            prop_assert!((call - put - (spot - strike)).abs() < 1e-9);
        }
    }
}
