//! CLI error types.

use std::path::PathBuf;

use bondval_bonds::BondError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid yield.
    #[error("Invalid yield: {0}. Must be a decimal rate above -1 and at most 10.")]
    InvalidYield(f64),

    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// Terms file could not be read.
    #[error("Cannot read terms file {path}: {source}")]
    TermsFile {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Terms file is not valid JSON terms.
    #[error("Invalid terms file {path}: {source}")]
    TermsFormat {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Bond construction or valuation error.
    #[error(transparent)]
    Bond(#[from] BondError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
