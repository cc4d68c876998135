//! Black–Scholes model for European options on a dividend-paying asset.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::market_data::Market;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::lit;
use crate::instruments::{OptionType, VanillaOption};

/// Maturities at or below this are treated as expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Closed-form sensitivities of a European option.
///
/// Theta is the calendar decay `-∂V/∂T` per year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// -∂V/∂T
    pub theta: T,
    /// ∂V/∂r
    pub rho: T,
    /// ∂²V/∂S∂σ
    pub vanna: T,
    /// ∂²V/∂σ²
    pub vomma: T,
    /// ∂³V/∂S²∂σ
    pub zomma: T,
}

/// Black–Scholes model with continuous dividend yield.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2, 0.0).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
    dividend_yield: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black–Scholes model.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2, 0.0).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0, 0.0).is_err());
    /// ```
    pub fn new(
        spot: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Builds the model from a market snapshot.
    ///
    /// # Errors
    /// Same as [`BlackScholes::new`].
    pub fn from_market(market: &Market<T>) -> Result<Self, AnalyticalError> {
        Self::new(
            market.spot(),
            market.rate(),
            market.volatility(),
            market.dividend_yield(),
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    #[inline]
    fn expired(maturity: T) -> bool {
        maturity <= lit(EXPIRY_EPSILON)
    }

    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// At expiry returns ±100 (or 0 at the money) so the CDF saturates.
    #[inline]
    pub fn d1(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            let large = lit::<T>(100.0);
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        let vol_sqrt_t = self.volatility * maturity.sqrt();
        let drift = (self.rate - self.dividend_yield
            + lit::<T>(0.5) * self.volatility * self.volatility)
            * maturity;

        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return self.d1(strike, maturity);
        }
        self.d1(strike, maturity) - self.volatility * maturity.sqrt()
    }

    #[inline]
    fn dividend_factor(&self, maturity: T) -> T {
        (-self.dividend_yield * maturity).exp()
    }

    #[inline]
    fn discount_factor(&self, maturity: T) -> T {
        (-self.rate * maturity).exp()
    }

    /// European call price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2, 0.0).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.4505835721856).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return (self.spot - strike).max(T::zero());
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);

        self.spot * self.dividend_factor(maturity) * norm_cdf(d1)
            - strike * self.discount_factor(maturity) * norm_cdf(d2)
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return (strike - self.spot).max(T::zero());
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);

        strike * self.discount_factor(maturity) * norm_cdf(-d2)
            - self.spot * self.dividend_factor(maturity) * norm_cdf(-d1)
    }

    /// European price for either right.
    #[inline]
    pub fn price(&self, strike: T, maturity: T, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, maturity),
            OptionType::Put => self.price_put(strike, maturity),
        }
    }

    /// Delta: e^(-qT)·N(d₁) for calls, e^(-qT)·(N(d₁) - 1) for puts.
    #[inline]
    pub fn delta(&self, strike: T, maturity: T, option_type: OptionType) -> T {
        if Self::expired(maturity) {
            let one = T::one();
            return match option_type {
                OptionType::Call if self.spot > strike => one,
                OptionType::Put if self.spot < strike => -one,
                _ => T::zero(),
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, maturity));
        let df_q = self.dividend_factor(maturity);
        match option_type {
            OptionType::Call => df_q * n_d1,
            OptionType::Put => df_q * (n_d1 - T::one()),
        }
    }

    /// Gamma: e^(-qT)·φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        self.dividend_factor(maturity) * norm_pdf(d1)
            / (self.spot * self.volatility * maturity.sqrt())
    }

    /// Vega: S·e^(-qT)·φ(d₁)·√T, identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        self.spot * self.dividend_factor(maturity) * norm_pdf(d1) * maturity.sqrt()
    }

    /// Theta as calendar decay per year.
    ///
    /// - Call: -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁)
    /// - Put: -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn theta(&self, strike: T, maturity: T, option_type: OptionType) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        let df_q = self.dividend_factor(maturity);
        let df_r = self.discount_factor(maturity);

        let decay = -(self.spot * df_q * norm_pdf(d1) * self.volatility)
            / (lit::<T>(2.0) * maturity.sqrt());

        match option_type {
            OptionType::Call => {
                decay - self.rate * strike * df_r * norm_cdf(d2)
                    + self.dividend_yield * self.spot * df_q * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike * df_r * norm_cdf(-d2)
                    - self.dividend_yield * self.spot * df_q * norm_cdf(-d1)
            }
        }
    }

    /// Rho: K·T·e^(-rT)·N(d₂) for calls, -K·T·e^(-rT)·N(-d₂) for puts.
    #[inline]
    pub fn rho(&self, strike: T, maturity: T, option_type: OptionType) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d2 = self.d2(strike, maturity);
        let scale = strike * maturity * self.discount_factor(maturity);
        match option_type {
            OptionType::Call => scale * norm_cdf(d2),
            OptionType::Put => -scale * norm_cdf(-d2),
        }
    }

    /// Vanna: -e^(-qT)·φ(d₁)·d₂/σ, identical for calls and puts.
    #[inline]
    pub fn vanna(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        -self.dividend_factor(maturity) * norm_pdf(d1) * d2 / self.volatility
    }

    /// Vomma: vega·d₁·d₂/σ.
    #[inline]
    pub fn vomma(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        self.vega(strike, maturity) * d1 * d2 / self.volatility
    }

    /// Zomma: gamma·(d₁·d₂ - 1)/σ.
    #[inline]
    pub fn zomma(&self, strike: T, maturity: T) -> T {
        if Self::expired(maturity) {
            return T::zero();
        }

        let d1 = self.d1(strike, maturity);
        let d2 = self.d2(strike, maturity);
        self.gamma(strike, maturity) * (d1 * d2 - T::one()) / self.volatility
    }

    /// All eight sensitivities at once.
    pub fn greeks(&self, strike: T, maturity: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, maturity, option_type),
            gamma: self.gamma(strike, maturity),
            vega: self.vega(strike, maturity),
            theta: self.theta(strike, maturity, option_type),
            rho: self.rho(strike, maturity, option_type),
            vanna: self.vanna(strike, maturity),
            vomma: self.vomma(strike, maturity),
            zomma: self.zomma(strike, maturity),
        }
    }

    /// Prices a European [`VanillaOption`].
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` if not European
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::{OptionType, VanillaOption};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2, 0.0).unwrap();
    /// let put = VanillaOption::european(100.0, 1.0, OptionType::Put).unwrap();
    /// assert!((bs.price_option(&put).unwrap() - 5.57352602225697).abs() < 1e-4);
    ///
    /// let american = VanillaOption::american(100.0, 1.0, OptionType::Put).unwrap();
    /// assert!(bs.price_option(&american).is_err());
    /// ```
    pub fn price_option(&self, option: &VanillaOption<T>) -> Result<T, AnalyticalError> {
        Self::require_european(option)?;
        Ok(self.price(option.strike(), option.maturity(), option.option_type()))
    }

    /// Greeks of a European [`VanillaOption`].
    ///
    /// # Errors
    /// - `AnalyticalError::UnsupportedExerciseStyle` if not European
    pub fn greeks_option(&self, option: &VanillaOption<T>) -> Result<Greeks<T>, AnalyticalError> {
        Self::require_european(option)?;
        Ok(self.greeks(option.strike(), option.maturity(), option.option_type()))
    }

    fn require_european(option: &VanillaOption<T>) -> Result<(), AnalyticalError> {
        if option.exercise_style().is_european() {
            Ok(())
        } else {
            Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.exercise_style().to_string(),
            })
        }
    }
}
