//! Bracketed root-finding algorithms.
//!
//! Both solvers need an interval `[a, b]` with `f(a)` and `f(b)` of
//! opposite sign, and both either return a root or report why they stopped:
//!
//! - [`brent`]: bisection safeguarded with secant and inverse quadratic steps
//! - [`bisection`]: interval halving, linear convergence
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Brent | Fast (superlinear) | Guaranteed | Bracket |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondval_math::solvers::{brent, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = brent(price_fn, 0.0001, 1.0, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);  // YTM > coupon rate for discount bond
//! ```

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// `tolerance` bounds the width of the final bracket around the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration can drive a solver.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for solvers that search inside a sign-changing interval.
///
/// # Example
///
/// ```rust
/// use bondval_math::solvers::{BracketedSolver, BrentSolver, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = BrentSolver.solve(f, (1.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub trait BracketedSolver: Send + Sync {
    /// Solves for a root of `f` inside `bracket`.
    fn solve<F>(&self, f: F, bracket: (f64, f64), config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Brent's method solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentSolver;

impl BracketedSolver for BrentSolver {
    fn solve<F>(&self, f: F, bracket: (f64, f64), config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        brent(f, bracket.0, bracket.1, config)
    }

    fn name(&self) -> &'static str {
        "Brent"
    }
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl BracketedSolver for BisectionSolver {
    fn solve<F>(&self, f: F, bracket: (f64, f64), config: &SolverConfig) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        bisection(f, bracket.0, bracket.1, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(SolverConfig::new(0.0, 10).validate().is_err());
        assert!(SolverConfig::new(f64::NAN, 10).validate().is_err());
        assert!(SolverConfig::new(1e-6, 0).validate().is_err());
    }

    #[test]
    fn test_solver_trait_brent() {
        let f = |x: f64| x * x - 2.0;

        let result = BrentSolver
            .solve(f, (1.0, 2.0), &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert_eq!(BrentSolver.name(), "Brent");
    }

    #[test]
    fn test_solver_trait_bisection() {
        let f = |x: f64| x * x - 2.0;

        let result = BisectionSolver
            .solve(f, (1.0, 2.0), &SolverConfig::default())
            .unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert_eq!(BisectionSolver.name(), "Bisection");
    }

    // ============ YTM-like Financial Tests ============

    /// Helper to calculate bond price from yield
    fn bond_price(yield_rate: f64, coupon: f64, face: f64, years: i32, freq: i32) -> f64 {
        let periods = years * freq;
        let coupon_per_period = coupon / f64::from(freq);
        let discount_rate = yield_rate / f64::from(freq);

        let mut pv = 0.0;
        for t in 1..=periods {
            pv += coupon_per_period / (1.0 + discount_rate).powi(t);
        }
        pv += face / (1.0 + discount_rate).powi(periods);
        pv
    }

    #[test]
    fn test_ytm_par_bond() {
        // A bond trading at par has YTM = coupon rate
        let f = |y: f64| bond_price(y, 5.0, 100.0, 10, 2) - 100.0;

        let result = brent(f, 0.0001, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn test_ytm_premium_bond() {
        let f = |y: f64| bond_price(y, 7.0, 100.0, 5, 2) - 105.0;

        let result = brent(f, 0.0001, 1.0, &SolverConfig::default()).unwrap();

        assert!(result.root < 0.07);
        assert!(f(result.root).abs() < 1e-6);
    }

    #[test]
    fn test_ytm_solvers_agree() {
        let f = |y: f64| bond_price(y, 6.0, 100.0, 7, 2) - 98.0;
        let config = SolverConfig::default();

        let brent_result = brent(f, 0.0001, 1.0, &config).unwrap();
        let bisection_result = bisection(f, 0.0001, 1.0, &config).unwrap();

        assert_relative_eq!(brent_result.root, bisection_result.root, epsilon = 1e-8);
        assert!(brent_result.iterations < bisection_result.iterations);
    }

    proptest! {
        #[test]
        fn prop_brent_recovers_linear_root(root in -50.0f64..50.0, slope in 0.1f64..10.0) {
            let f = |x: f64| slope * (x - root);
            let result = brent(f, -100.0, 100.0, &SolverConfig::default()).unwrap();
            prop_assert!((result.root - root).abs() < 1e-8);
        }
    }
}
