//! Simpson's rule for numerical integration.
//!
//! Simpson's rule uses parabolic approximation between sample points,
//! achieving O(h⁴) accuracy for smooth functions.

use crate::quadrature::error::{QuadratureError, QuadratureResult};

/// Integrate a function using the composite Simpson's 1/3 rule.
///
/// Simpson's rule requires an even number of subintervals; an odd `n` is
/// rounded up to `n + 1`, so `simpson(f, a, b, 5)` computes the same
/// estimate as `simpson(f, a, b, 6)`. With the corrected count, `f` is
/// sampled at `n + 1` equally spaced points and summed as
/// `(h/3) * (f(a) + f(b) + 4 * odd-indexed samples + 2 * even-indexed samples)`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals (odd values are rounded up to even)
///
/// # Returns
///
/// The approximate integral value.
///
/// # Errors
///
/// Returns an error if `n` is zero or the interval is invalid (`a >= b`).
/// Both checks happen before `f` is evaluated.
///
/// # Example
///
/// ```
/// use quadr::quadrature::simpson;
///
/// // Integrate sin(x) from 0 to pi
/// let result = simpson(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100).unwrap();
/// assert!((result - 2.0).abs() < 1e-6);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> QuadratureResult<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(QuadratureError::InvalidParameter {
            parameter: "n".to_string(),
            message: "need at least 1 subinterval".to_string(),
        });
    }

    if a >= b {
        return Err(QuadratureError::InvalidInterval {
            a,
            b,
            context: "simpson".to_string(),
        });
    }

    let n = if n.is_multiple_of(2) { n } else { n + 1 };
    let h = (b - a) / n as f64;

    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + i as f64 * h;
        if i.is_multiple_of(2) {
            sum += 2.0 * f(x);
        } else {
            sum += 4.0 * f(x);
        }
    }

    Ok(h * sum / 3.0)
}
