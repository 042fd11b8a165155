//! Trapezoidal rule for numerical integration.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions.

use crate::quadrature::error::{QuadratureError, QuadratureResult};

/// Integrate a function using the composite trapezoidal rule.
///
/// Samples `f` at `n + 1` equally spaced points (both endpoints included)
/// with spacing `h = (b - a) / n` and sums the trapezoid areas:
/// `h * (f(a)/2 + interior samples + f(b)/2)`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `n` - Number of subintervals
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
/// use quadr::quadrature::trapezoid;
///
/// // Integrate x^2 from 0 to 1
/// let result = trapezoid(|x: f64| x * x, 0.0, 1.0, 1000).unwrap();
/// // Exact value is 1/3
/// assert!((result - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> QuadratureResult<f64>
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
            context: "trapezoid".to_string(),
        });
    }

    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(h * sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoid_constant() {
        // Exact for constants: c * (b - a)
        let result = trapezoid(|_| 5.0, 0.0, 4.0, 7).unwrap();
        assert!((result - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_linear() {
        // Exact for linear functions
        let result = trapezoid(|x| x, 0.0, 1.0, 10).unwrap();
        assert!((result - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_quadratic() {
        // Integral of x^2 from 0 to 1 = 1/3
        let result = trapezoid(|x| x * x, 0.0, 1.0, 1000).unwrap();
        assert!((result - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_trapezoid_sin() {
        // Integral of sin(x) from 0 to pi = 2
        let result = trapezoid(|x: f64| x.sin(), 0.0, PI, 1000).unwrap();
        assert!((result - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_trapezoid_exp_convergence() {
        // f(t) = e^{-t} on [0, 1]: relative error decreases as 1/N^2,
        // roughly h^2/12 for this integrand.
        let exact = 1.0 - (-1.0f64).exp();

        let coarse = trapezoid(|t: f64| (-t).exp(), 0.0, 1.0, 2).unwrap();
        let err_coarse = (coarse - exact).abs() / exact;
        assert!(err_coarse > 1.5e-2 && err_coarse < 2.5e-2, "err = {err_coarse:e}");

        let fine = trapezoid(|t: f64| (-t).exp(), 0.0, 1.0, 640).unwrap();
        let err_fine = (fine - exact).abs() / exact;
        assert!(err_fine > 1.0e-7 && err_fine < 3.0e-7, "err = {err_fine:e}");
    }

    #[test]
    fn test_trapezoid_errors() {
        // n = 0
        assert!(trapezoid(|x| x, 0.0, 1.0, 0).is_err());

        // a >= b
        assert!(trapezoid(|x| x, 1.0, 1.0, 10).is_err());
        assert!(trapezoid(|x| x, 2.0, 1.0, 10).is_err());
    }

    #[test]
    fn test_trapezoid_fails_before_sampling() {
        let result = trapezoid(|_| panic!("integrand must not be evaluated"), 1.0, 0.0, 4);
        assert!(result.is_err());
    }
}
