//! Closed-form Black–Scholes formulas for European options.
//!
//! - [`distributions`]: standard normal CDF and PDF
//! - [`black_scholes`]: prices and Greeks with a continuous dividend yield
//! - [`error`]: [`AnalyticalError`]
//!
//! Everything is generic over `T: Float`.

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;

/// Converts an `f64` literal into `T`.
#[inline]
pub(crate) fn lit<T: num_traits::Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}
