//! Convergence analysis of quadrature rules.
//!
//! Drives the trapezoidal, Simpson and Gauss-Legendre rules across a
//! sequence of resolutions and records the relative error of each rule
//! against an analytically known integral. The resulting error series feed
//! the text table writer ([`write_table`]) and the log-log plot renderer
//! ([`plot_errors`]).

mod plot;
mod report;

pub use plot::plot_errors;
pub use report::write_table;

use crate::quadrature::error::{QuadratureError, QuadratureResult};
use crate::quadrature::{gauss_legendre, simpson, trapezoid};

/// Smallest relative error reported for Gauss-Legendre.
///
/// At moderate node counts the Gauss-Legendre estimate already reaches
/// machine precision, so the raw error is rounding noise; values below this
/// floor would render as spikes (or minus infinity) on a log scale.
pub const ERROR_FLOOR: f64 = 1e-16;

/// Largest Gauss-Legendre node count used by the analysis.
///
/// Node generation loses accuracy as n grows into the tens and beyond, so
/// the analysis saturates at this count while trapezoid and Simpson keep
/// refining along the nominal resolution axis.
pub const MAX_GAUSS_NODES: usize = 20;

/// Options for convergence analysis.
#[derive(Debug, Clone)]
pub struct ConvergenceOptions {
    /// Lower clamp applied to the Gauss-Legendre error series
    /// (default: [`ERROR_FLOOR`])
    pub error_floor: f64,
    /// Cap on the Gauss-Legendre node count (default: [`MAX_GAUSS_NODES`])
    pub max_gauss_nodes: usize,
}

impl Default for ConvergenceOptions {
    fn default() -> Self {
        Self {
            error_floor: ERROR_FLOOR,
            max_gauss_nodes: MAX_GAUSS_NODES,
        }
    }
}

/// Relative errors of each rule across a resolution sequence.
///
/// All four sequences have the same length; index `i` of every error
/// series corresponds to `resolutions[i]`.
#[derive(Debug, Clone)]
pub struct ConvergenceErrors {
    /// Resolution sequence the analysis ran over
    pub resolutions: Vec<usize>,
    /// Trapezoidal-rule relative errors
    pub trapezoid: Vec<f64>,
    /// Simpson-rule relative errors
    pub simpson: Vec<f64>,
    /// Gauss-Legendre relative errors (clamped at the error floor)
    pub gauss_legendre: Vec<f64>,
}

/// Compare the convergence of the three rules against an exact integral.
///
/// For each resolution `N` in `ns`, the trapezoidal and Simpson rules are
/// invoked with `N` subintervals and Gauss-Legendre with
/// `min(N, max_gauss_nodes)` nodes, so the resolution axis stays comparable
/// across rules even though Gauss-Legendre saturates. Each estimate is
/// turned into a relative error `|estimate - exact| / |exact|`; the
/// Gauss-Legendre series is additionally clamped below at
/// `options.error_floor`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `exact` - Analytically known value of the integral (must be nonzero)
/// * `ns` - Resolution sequence, positive and strictly increasing
/// * `options` - Analysis options
///
/// # Errors
///
/// Returns an error if the interval is invalid (`a >= b`), `exact` is zero
/// (relative error undefined), `ns` is empty, not strictly increasing or
/// contains zero, or `options.max_gauss_nodes` is zero. All validation
/// happens before `f` is evaluated.
///
/// # Example
///
/// ```
/// use quadr::convergence::{ConvergenceOptions, error_analysis};
///
/// let exact = 1.0 - (-1.0f64).exp();
/// let errors = error_analysis(
///     |t: f64| (-t).exp(),
///     0.0,
///     1.0,
///     exact,
///     &[2, 4, 8],
///     &ConvergenceOptions::default(),
/// )
/// .unwrap();
/// // Halving the step size quarters the trapezoid error
/// assert!(errors.trapezoid[2] < errors.trapezoid[0]);
/// ```
pub fn error_analysis<F>(
    f: F,
    a: f64,
    b: f64,
    exact: f64,
    ns: &[usize],
    options: &ConvergenceOptions,
) -> QuadratureResult<ConvergenceErrors>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(QuadratureError::InvalidInterval {
            a,
            b,
            context: "error_analysis".to_string(),
        });
    }

    if exact == 0.0 {
        return Err(QuadratureError::DegenerateExact {
            context: "error_analysis".to_string(),
        });
    }

    if ns.is_empty() {
        return Err(QuadratureError::InvalidParameter {
            parameter: "ns".to_string(),
            message: "need at least one resolution".to_string(),
        });
    }

    if ns[0] == 0 || !ns.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(QuadratureError::InvalidParameter {
            parameter: "ns".to_string(),
            message: "resolutions must be positive and strictly increasing".to_string(),
        });
    }

    if options.max_gauss_nodes == 0 {
        return Err(QuadratureError::InvalidParameter {
            parameter: "max_gauss_nodes".to_string(),
            message: "need at least 1 node".to_string(),
        });
    }

    let mut errors = ConvergenceErrors {
        resolutions: ns.to_vec(),
        trapezoid: Vec::with_capacity(ns.len()),
        simpson: Vec::with_capacity(ns.len()),
        gauss_legendre: Vec::with_capacity(ns.len()),
    };

    for &n in ns {
        let trap = trapezoid(&f, a, b, n)?;
        let simp = simpson(&f, a, b, n)?;
        let gauss = gauss_legendre(&f, a, b, n.min(options.max_gauss_nodes))?;

        errors.trapezoid.push(relative_error(trap, exact));
        errors.simpson.push(relative_error(simp, exact));
        errors
            .gauss_legendre
            .push(relative_error(gauss, exact).max(options.error_floor));
    }

    Ok(errors)
}

fn relative_error(estimate: f64, exact: f64) -> f64 {
    (estimate - exact).abs() / exact.abs()
}
