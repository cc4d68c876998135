//! Least-squares fit of a quadratic, used for LSM continuation values.

/// Relative pivot size below which the normal matrix is treated as singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Fitted polynomial `a + b·x + c·x²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticFit {
    /// Constant term.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Quadratic coefficient.
    pub c: f64,
}

impl QuadraticFit {
    /// Evaluates the fitted polynomial.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.a + x * (self.b + x * self.c)
    }
}

/// Fits `y ≈ a + b·x + c·x²` by solving the 3×3 normal equations.
///
/// Returns `None` when fewer than three points are given or the normal
/// matrix is numerically singular (for example, all `x` equal).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::fit_quadratic;
///
/// let points = (0..10).map(|i| {
///     let x = i as f64;
///     (x, 1.0 + 2.0 * x + 0.5 * x * x)
/// });
/// let fit = fit_quadratic(points).unwrap();
/// assert!((fit.eval(20.0) - 241.0).abs() < 1e-6);
/// ```
pub fn fit_quadratic<I>(points: I) -> Option<QuadraticFit>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut n = 0.0;
    let (mut sx, mut sx2, mut sx3, mut sx4) = (0.0, 0.0, 0.0, 0.0);
    let (mut sy, mut sxy, mut sx2y) = (0.0, 0.0, 0.0);

    for (x, y) in points {
        let x2 = x * x;
        n += 1.0;
        sx += x;
        sx2 += x2;
        sx3 += x2 * x;
        sx4 += x2 * x2;
        sy += y;
        sxy += x * y;
        sx2y += x2 * y;
    }

    if n < 3.0 {
        return None;
    }

    let matrix = [[n, sx, sx2], [sx, sx2, sx3], [sx2, sx3, sx4]];
    let [a, b, c] = solve_3x3(matrix, [sy, sxy, sx2y])?;
    Some(QuadraticFit { a, b, c })
}

/// Gaussian elimination with partial pivoting.
fn solve_3x3(mut m: [[f64; 3]; 3], mut rhs: [f64; 3]) -> Option<[f64; 3]> {
    let scale = m
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if !scale.is_finite() || scale == 0.0 {
        return None;
    }

    for col in 0..3 {
        let pivot_row = (col..3).max_by(|&i, &j| m[i][col].abs().total_cmp(&m[j][col].abs()))?;
        if m[pivot_row][col].abs() <= SINGULAR_TOLERANCE * scale {
            return None;
        }
        m.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in col + 1..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..3 {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = [0.0; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| m[row][k] * x[k]).sum();
        x[row] = (rhs[row] - tail) / m[row][row];
    }

    x.iter().all(|v| v.is_finite()).then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_recovers_exact_quadratic() {
        let points: Vec<(f64, f64)> = (0..25)
            .map(|i| {
                let x = 0.5 + i as f64 * 0.05;
                (x, 3.0 - 4.0 * x + 1.5 * x * x)
            })
            .collect();
        let fit = fit_quadratic(points).unwrap();
        assert_relative_eq!(fit.a, 3.0, epsilon = 1e-8);
        assert_relative_eq!(fit.b, -4.0, epsilon = 1e-8);
        assert_relative_eq!(fit.c, 1.5, epsilon = 1e-8);
    }

    #[test]
    fn test_least_squares_of_noisy_line() {
        // symmetric residuals around y = x leave the fit unchanged
        let points = vec![(0.0, 0.1), (0.0, -0.1), (1.0, 1.1), (1.0, 0.9), (2.0, 2.1), (2.0, 1.9)];
        let fit = fit_quadratic(points).unwrap();
        assert_relative_eq!(fit.eval(1.5), 1.5, epsilon = 1e-10);
    }

    #[test]
    fn test_too_few_points() {
        assert!(fit_quadratic(vec![(1.0, 1.0), (2.0, 2.0)]).is_none());
        assert!(fit_quadratic(Vec::new()).is_none());
    }

    #[test]
    fn test_degenerate_abscissae() {
        let points = vec![(1.0, 1.0), (1.0, 2.0), (1.0, 3.0), (1.0, 4.0)];
        assert!(fit_quadratic(points).is_none());
    }

    #[test]
    fn test_two_distinct_abscissae_is_singular() {
        let points = vec![(1.0, 1.0), (1.0, 2.0), (2.0, 3.0), (2.0, 4.0)];
        assert!(fit_quadratic(points).is_none());
    }
}
