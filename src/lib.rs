//! quadr - Quadrature convergence study
//!
//! quadr compares the convergence behavior of three classic quadrature
//! rules (trapezoidal, Simpson's, Gauss-Legendre) against analytically
//! known integrals, for a smooth function and an oscillatory one.
//!
//! # Modules
//!
//! - [`quadrature`] - The three rules as pure functions over an integrand
//!   closure, plus a reusable [`GaussLegendre`] node/weight rule
//! - [`convergence`] - The error analyzer ([`error_analysis`]) that drives
//!   the rules across a resolution sequence, and the reporters
//!   ([`write_table`], [`plot_errors`]) that tabulate and plot the result
//!
//! # Example
//!
//! ```
//! use quadr::convergence::{ConvergenceOptions, error_analysis};
//!
//! // Smooth case: integral of e^{-t} over [0, 1] is 1 - e^{-1}
//! let exact = 1.0 - (-1.0f64).exp();
//! let errors = error_analysis(
//!     |t: f64| (-t).exp(),
//!     0.0,
//!     1.0,
//!     exact,
//!     &[2, 10, 20, 40],
//!     &ConvergenceOptions::default(),
//! )
//! .unwrap();
//!
//! // The trapezoid error shrinks as 1/N^2
//! assert!(errors.trapezoid[3] < errors.trapezoid[0] / 100.0);
//! // The Gauss-Legendre error never drops below the reporting floor
//! assert!(errors.gauss_legendre.iter().all(|&e| e >= quadr::convergence::ERROR_FLOOR));
//! ```

pub mod convergence;
pub mod quadrature;

// Re-export main types for convenience
pub use convergence::{
    ConvergenceErrors, ConvergenceOptions, ERROR_FLOOR, MAX_GAUSS_NODES, error_analysis,
    plot_errors, write_table,
};
pub use quadrature::{
    GaussLegendre, QuadratureError, QuadratureResult, gauss_legendre, simpson, trapezoid,
};
