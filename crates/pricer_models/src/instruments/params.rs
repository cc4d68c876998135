//! Contract parameters shared by option instruments.

use num_traits::Float;

use super::error::InstrumentError;

/// Strike and maturity of an option contract.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
///
/// let params = InstrumentParams::new(100.0_f64, 1.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.maturity(), 1.0);
///
/// assert!(InstrumentParams::new(100.0_f64, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentParams<T: Float> {
    strike: T,
    maturity: T,
}

impl<T: Float> InstrumentParams<T> {
    /// Creates validated parameters.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive and finite)
    /// * `maturity` - Time to expiry in years (must be positive and finite)
    pub fn new(strike: T, maturity: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if !strike.is_finite() || strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !maturity.is_finite() || maturity <= zero {
            return Err(InstrumentError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { strike, maturity })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_params() {
        let params = InstrumentParams::new(100.0_f64, 0.5).unwrap();
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.maturity(), 0.5);
    }

    #[test]
    fn test_new_invalid_strike() {
        match InstrumentParams::new(-100.0_f64, 1.0) {
            Err(InstrumentError::InvalidStrike { strike }) => assert_eq!(strike, -100.0),
            other => panic!("Expected InvalidStrike, got {:?}", other),
        }
        assert!(InstrumentParams::new(0.0_f64, 1.0).is_err());
        assert!(InstrumentParams::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_new_invalid_maturity() {
        match InstrumentParams::new(100.0_f64, -1.0) {
            Err(InstrumentError::InvalidMaturity { maturity }) => assert_eq!(maturity, -1.0),
            other => panic!("Expected InvalidMaturity, got {:?}", other),
        }
        assert!(InstrumentParams::new(100.0_f64, f64::NAN).is_err());
    }
}
