//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Errors that can occur during quadrature and convergence analysis.
#[derive(Debug, Clone)]
pub enum QuadratureError {
    /// Invalid interval provided (e.g., a >= b).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// The reference integral is zero, so relative error is undefined.
    DegenerateExact { context: String },
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::DegenerateExact { context } => {
                write!(
                    f,
                    "{}: exact integral is zero, relative error is undefined",
                    context
                )
            }
        }
    }
}

impl std::error::Error for QuadratureError {}
