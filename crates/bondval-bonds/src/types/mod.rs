//! Plain data types shared across the engine.

mod terms;

pub use terms::BondTerms;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bracketed root-finding method used by the yield solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldMethod {
    /// Brent's method.
    #[default]
    Brent,
    /// Interval bisection.
    Bisection,
}

impl fmt::Display for YieldMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            YieldMethod::Brent => "Brent",
            YieldMethod::Bisection => "Bisection",
        };
        write!(f, "{name}")
    }
}
