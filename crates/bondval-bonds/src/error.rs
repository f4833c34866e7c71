//! Error types for bond operations.

use bondval_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Contractual terms or call arguments outside their domain.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what's invalid.
        reason: String,
    },

    /// Yield calculation did not converge.
    #[error("YTM calculation did not converge after {iterations} iterations: {reason}")]
    ConvergenceFailure {
        /// Description of the failure.
        reason: String,
        /// Number of iterations attempted.
        iterations: u32,
    },
}

impl BondError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failure(reason: impl Into<String>, iterations: u32) -> Self {
        Self::ConvergenceFailure {
            reason: reason.into(),
            iterations,
        }
    }

    /// Returns true for solver non-convergence.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidBracket { a, b, fa, fb } => Self::convergence_failure(
                format!(
                    "no sign change in yield bracket [{a}, {b}] (f = {fa:.6}, {fb:.6})"
                ),
                0,
            ),
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::convergence_failure(
                format!("iteration limit reached (residual: {residual:.2e})"),
                iterations,
            ),
            MathError::InvalidInput { reason } => Self::invalid_argument(reason),
        }
    }
}
