//! Standard normal distribution functions.
//!
//! Generic over `T: Float`. The CDF uses the Abramowitz and Stegun 7.1.26
//! rational approximation of `erfc`, accurate to 1.5e-7.

use num_traits::Float;

use super::lit;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, A&S 7.1.26 evaluated by Horner's rule.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function, Φ(x) = erfc(-x/√2)/2.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    lit::<T>(0.5) * erfc_approx(-x / lit::<T>(SQRT_2))
}

/// Standard normal density, φ(x) = exp(-x²/2)/√(2π).
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-lit::<T>(0.5) * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_table_values() {
        let table = [
            (-2.0, 0.022750131948179195),
            (-1.0, 0.15865525393145707),
            (0.0, 0.5),
            (1.0, 0.8413447460685429),
            (2.0, 0.9772498680518208),
            (3.0, 0.9986501019683699),
        ];
        for (x, expected) in table {
            assert_relative_eq!(norm_cdf(x), expected, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_cdf_symmetry_and_bounds() {
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            let cdf = norm_cdf(x);
            assert!((0.0..=1.0).contains(&cdf), "Φ({}) = {} out of [0, 1]", x, cdf);
            assert_relative_eq!(cdf + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cdf_strictly_increasing() {
        let mut previous = norm_cdf(-5.0_f64);
        for i in -49..=50 {
            let current = norm_cdf(i as f64 * 0.1);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-10);
        assert_relative_eq!(norm_pdf(-1.5_f64), norm_pdf(1.5_f64), epsilon = 1e-15);
        assert!(norm_pdf(8.0_f64) < 1e-12);
    }

    #[test]
    fn test_pdf_is_derivative_of_cdf() {
        let h = 1e-4;
        for x in [-2.0, -0.7, 0.0, 0.4, 1.9] {
            let slope = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(slope, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_f32_support() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-5);
    }
}
