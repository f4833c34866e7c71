//! Bond pricing and yield calculations.
//!
//! - [`present_value`]: price under a flat, frequency-compounded yield
//! - [`YieldSolver`]: price → yield inversion by bracketed root-finding

mod discount;
mod yield_solver;

pub use discount::{discount_factor, present_value, present_values};
pub use yield_solver::{
    YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS, DEFAULT_YIELD_BRACKET,
    DEFAULT_YTM_MAX_ITERATIONS, DEFAULT_YTM_TOLERANCE,
};
