//! Error types for structured error handling.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, instrument or parameters
/// - `NumericalInstability`: A derived quantity left its admissible range
/// - `ModelFailure`: Model assumptions violated
/// - `UnsupportedInstrument`: Method cannot value this exercise style
/// - `UnsupportedMethod`: Method tag not recognised
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Pricer or Greek method invoked on an exercise style it does not support
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),

    /// Unrecognised pricing or Greek method tag
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
}

impl PricingError {
    /// Returns `true` for the unsupported-combination and unknown-tag cases.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            PricingError::UnsupportedInstrument(_) | PricingError::UnsupportedMethod(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("Test error".to_string());
        assert_eq!(format!("{}", err), "Invalid input: Test error");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("p = 1.2".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: p = 1.2");
    }

    #[test]
    fn test_unsupported_display() {
        let err = PricingError::UnsupportedInstrument("American option".to_string());
        assert_eq!(format!("{}", err), "Unsupported instrument: American option");

        let err = PricingError::UnsupportedMethod("heston".to_string());
        assert_eq!(format!("{}", err), "Unsupported method: heston");
    }

    #[test]
    fn test_is_unsupported() {
        assert!(PricingError::UnsupportedMethod("x".into()).is_unsupported());
        assert!(PricingError::UnsupportedInstrument("x".into()).is_unsupported());
        assert!(!PricingError::ModelFailure("x".into()).is_unsupported());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("Test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput("Test".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
