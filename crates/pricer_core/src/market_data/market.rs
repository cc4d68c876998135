//! Immutable market snapshot.

use super::error::MarketDataError;
use crate::traits::Float;

/// Market state for one valuation.
///
/// `Copy` value type. Every override returns a fresh, re-validated snapshot
/// and leaves the receiver untouched, so perturbed copies built for
/// finite-difference Greeks never alias the caller's market.
///
/// # Invariants
/// - `spot > 0`, `volatility > 0`, `dividend_yield >= 0`
/// - `rate` may be any finite real (negative rates are allowed)
///
/// # Examples
/// ```
/// use pricer_core::market_data::Market;
///
/// let market = Market::new(100.0_f64, -0.01, 0.25, 0.0).unwrap();
/// assert_eq!(market.rate(), -0.01);
///
/// assert!(Market::new(0.0_f64, 0.05, 0.2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Market<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
    dividend_yield: T,
}

impl<T: Float> Market<T> {
    /// Creates a validated market snapshot.
    ///
    /// # Errors
    /// - [`MarketDataError::NonFinite`] if any field is NaN or infinite
    /// - [`MarketDataError::InvalidSpot`] if `spot <= 0`
    /// - [`MarketDataError::InvalidVolatility`] if `volatility <= 0`
    /// - [`MarketDataError::InvalidDividendYield`] if `dividend_yield < 0`
    pub fn new(
        spot: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, MarketDataError> {
        let market = Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        };
        market.validate()?;
        Ok(market)
    }

    fn validate(&self) -> Result<(), MarketDataError> {
        for (field, value) in [
            ("spot", self.spot),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("dividend_yield", self.dividend_yield),
        ] {
            if !value.is_finite() {
                return Err(MarketDataError::NonFinite { field });
            }
        }
        if self.spot <= T::zero() {
            return Err(MarketDataError::InvalidSpot {
                spot: self.spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.volatility <= T::zero() {
            return Err(MarketDataError::InvalidVolatility {
                volatility: self.volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.dividend_yield < T::zero() {
            return Err(MarketDataError::InvalidDividendYield {
                dividend_yield: self.dividend_yield.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Black–Scholes volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Copy with a different spot.
    pub fn with_spot(&self, spot: T) -> Result<Self, MarketDataError> {
        Self::new(spot, self.rate, self.volatility, self.dividend_yield)
    }

    /// Copy with a different rate.
    pub fn with_rate(&self, rate: T) -> Result<Self, MarketDataError> {
        Self::new(self.spot, rate, self.volatility, self.dividend_yield)
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, MarketDataError> {
        Self::new(self.spot, self.rate, volatility, self.dividend_yield)
    }

    /// Copy with a different dividend yield.
    pub fn with_dividend_yield(&self, dividend_yield: T) -> Result<Self, MarketDataError> {
        Self::new(self.spot, self.rate, self.volatility, dividend_yield)
    }

    /// Discount factor `exp(-r t)`.
    #[inline]
    pub fn discount_factor(&self, t: T) -> T {
        (-self.rate * t).exp()
    }

    /// Dividend discount factor `exp(-q t)`.
    #[inline]
    pub fn dividend_factor(&self, t: T) -> T {
        (-self.dividend_yield * t).exp()
    }

    /// Risk-neutral drift of the log-spot, `r - q - σ²/2`.
    #[inline]
    pub fn log_drift(&self) -> T {
        let half = T::from(0.5).unwrap_or_else(T::zero);
        self.rate - self.dividend_yield - half * self.volatility * self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn base() -> Market<f64> {
        Market::new(100.0, 0.05, 0.20, 0.03).unwrap()
    }

    #[test]
    fn test_accessors() {
        let m = base();
        assert_eq!(m.spot(), 100.0);
        assert_eq!(m.rate(), 0.05);
        assert_eq!(m.volatility(), 0.20);
        assert_eq!(m.dividend_yield(), 0.03);
    }

    #[test]
    fn test_rejects_invalid_fields() {
        assert!(matches!(
            Market::new(-1.0, 0.05, 0.2, 0.0),
            Err(MarketDataError::InvalidSpot { .. })
        ));
        assert!(matches!(
            Market::new(100.0, 0.05, 0.0, 0.0),
            Err(MarketDataError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            Market::new(100.0, 0.05, 0.2, -0.01),
            Err(MarketDataError::InvalidDividendYield { .. })
        ));
        assert!(matches!(
            Market::new(100.0, f64::NAN, 0.2, 0.0),
            Err(MarketDataError::NonFinite { field: "rate" })
        ));
    }

    #[test]
    fn test_negative_rate_allowed() {
        let m = Market::new(100.0, -0.02, 0.2, 0.0).unwrap();
        assert_eq!(m.rate(), -0.02);
    }

    #[test]
    fn test_overrides_revalidate() {
        let m = base();
        assert!(m.with_spot(0.0).is_err());
        assert!(m.with_volatility(-0.1).is_err());
        assert!(m.with_rate(-0.5).is_ok());
    }

    #[test]
    fn test_discount_factors() {
        let m = base();
        assert_relative_eq!(m.discount_factor(1.0), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(m.dividend_factor(2.0), (-0.06_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(m.log_drift(), 0.05 - 0.03 - 0.02, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn prop_overrides_leave_receiver_untouched(
            spot in 1.0..500.0_f64,
            vol in 0.01..1.0_f64,
            rate in -0.05..0.2_f64,
        ) {
            let m = base();
            let bumped = m
                .with_spot(spot)
                .and_then(|b| b.with_volatility(vol))
                .and_then(|b| b.with_rate(rate))
                .unwrap();

            prop_assert_eq!(m, base());
            prop_assert_eq!(bumped.spot(), spot);
            prop_assert_eq!(bumped.volatility(), vol);
            prop_assert_eq!(bumped.rate(), rate);
            prop_assert_eq!(bumped.dividend_yield(), m.dividend_yield());
        }
    }
}
