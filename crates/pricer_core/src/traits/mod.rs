//! Core numeric traits.
//!
//! Closed-form models are written against [`Float`] so that the same code
//! runs on `f64` and on forward-mode dual numbers when verifying Greeks.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = discount(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
