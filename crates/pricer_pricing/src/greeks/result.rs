//! Greek sensitivity vector.

use pricer_models::analytical::Greeks;

/// Sensitivities of an option value, as produced by every
/// [`GreekCalculator`](super::GreekCalculator).
///
/// # First-Order Greeks
///
/// - `delta`: ∂V/∂S
/// - `vega`: ∂V/∂σ
/// - `theta`: calendar decay −∂V/∂T, per year
/// - `rho`: ∂V/∂r
///
/// # Higher-Order Greeks
///
/// - `gamma`: ∂²V/∂S²
/// - `vanna`: ∂²V/∂S∂σ
/// - `vomma`: ∂²V/∂σ²
/// - `zomma`: ∂³V/∂S²∂σ
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::GreekResult;
///
/// let result = GreekResult {
///     delta: 0.55,
///     gamma: 0.02,
///     ..Default::default()
/// };
/// assert_eq!(result.vomma, 0.0);
/// assert_eq!(result.iter().count(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekResult {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// −∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
    /// ∂²V/∂S∂σ
    pub vanna: f64,
    /// ∂²V/∂σ²
    pub vomma: f64,
    /// ∂Γ/∂σ
    pub zomma: f64,
}

impl GreekResult {
    /// Greek names in display order.
    pub const NAMES: [&'static str; 8] = [
        "delta", "gamma", "vega", "theta", "rho", "vanna", "vomma", "zomma",
    ];

    /// Values in the order of [`GreekResult::NAMES`].
    #[inline]
    pub fn to_array(&self) -> [f64; 8] {
        [
            self.delta, self.gamma, self.vega, self.theta, self.rho, self.vanna, self.vomma,
            self.zomma,
        ]
    }

    /// Iterates `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::NAMES.into_iter().zip(self.to_array())
    }

    /// True when every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<Greeks<f64>> for GreekResult {
    fn from(g: Greeks<f64>) -> Self {
        Self {
            delta: g.delta,
            gamma: g.gamma,
            vega: g.vega,
            theta: g.theta,
            rho: g.rho,
            vanna: g.vanna,
            vomma: g.vomma,
            zomma: g.zomma,
        }
    }
}
