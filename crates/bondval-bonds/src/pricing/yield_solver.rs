//! Yield-to-maturity solver.
//!
//! Inverts the pricing function: finds `y` with `price(y) = market_price`
//! by bracketed root-finding on
//!
//! ```text
//! f(y) = price(y) - market_price
//! ```
//!
//! over `[0.0001, 1.0]` by default. A price that needs a yield outside the
//! bracket, or a search that runs out of iterations, is reported as
//! [`BondError::ConvergenceFailure`]; the solver never returns a boundary
//! yield or the initial guess as a fallback.
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::pricing::YieldSolver;
//! use bondval_bonds::types::YieldMethod;
//! use bondval_bonds::Bond;
//!
//! let bond = Bond::new(950.0, 0.05, 5.0, 1).unwrap();
//! let solver = YieldSolver::new()
//!     .with_method(YieldMethod::Bisection)
//!     .with_tolerance(1e-8);
//!
//! let result = solver.solve(&bond, 1100.0).unwrap();
//! assert!((result.yield_value - 0.0168).abs() < 1e-3);
//! ```

use bondval_math::solvers::{BisectionSolver, BracketedSolver, BrentSolver, SolverConfig};
use serde::Serialize;

use crate::error::{BondError, BondResult};
use crate::instruments::Bond;
use crate::types::YieldMethod;

/// Default convergence tolerance on the yield.
pub const DEFAULT_YTM_TOLERANCE: f64 = 1e-6;

/// Default iteration budget.
pub const DEFAULT_YTM_MAX_ITERATIONS: u32 = 100;

/// Default starting point; kept for callers that pass one.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Default search interval for the yield, 0.01% to 100%.
pub const DEFAULT_YIELD_BRACKET: (f64, f64) = (0.0001, 1.0);

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final residual, `price(yield) - market_price`.
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    method: YieldMethod,
    bracket: (f64, f64),
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-6
    /// Default max iterations: 100
    /// Default bracket: [0.0001, 1.0]
    /// Default method: Brent
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_YTM_TOLERANCE, DEFAULT_YTM_MAX_ITERATIONS),
            method: YieldMethod::Brent,
            bracket: DEFAULT_YIELD_BRACKET,
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the root-finding method.
    #[must_use]
    pub fn with_method(mut self, method: YieldMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the yield search interval.
    #[must_use]
    pub fn with_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.bracket = (lower, upper);
        self
    }

    /// Sets the initial guess.
    ///
    /// The bracketed methods start from the interval ends, so the guess does
    /// not change the result.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Returns the root-finding method.
    pub fn method(&self) -> YieldMethod {
        self.method
    }

    /// Returns the yield search interval.
    pub fn bracket(&self) -> (f64, f64) {
        self.bracket
    }

    /// Returns the initial guess.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Solves for the yield that reprices `bond` to `market_price`.
    pub fn solve(&self, bond: &Bond, market_price: f64) -> BondResult<YieldResult> {
        if !market_price.is_finite() {
            return Err(BondError::invalid_argument(format!(
                "market price must be finite, got {market_price}"
            )));
        }
        let (lower, upper) = self.bracket;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(BondError::invalid_argument(format!(
                "yield bracket must be an increasing finite interval, got [{lower}, {upper}]"
            )));
        }

        log::debug!(
            "solving YTM for {} at price {market_price} ({}, bracket [{lower}, {upper}], tol {:e})",
            bond.terms(),
            self.method,
            self.config.tolerance
        );

        let objective = |y: f64| bond.price(y) - market_price;
        let outcome = match self.method {
            YieldMethod::Brent => BrentSolver.solve(objective, self.bracket, &self.config),
            YieldMethod::Bisection => BisectionSolver.solve(objective, self.bracket, &self.config),
        };

        match outcome {
            Ok(result) => {
                log::debug!(
                    "YTM {} found in {} iterations (residual {:e})",
                    result.root,
                    result.iterations,
                    result.residual
                );
                Ok(YieldResult {
                    yield_value: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                })
            }
            Err(err) => {
                log::warn!("YTM solve failed for price {market_price}: {err}");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_bond() -> Bond {
        Bond::new(1000.0, 0.06, 5.0, 2).unwrap()
    }

    #[test]
    fn test_defaults() {
        let solver = YieldSolver::default();
        assert_eq!(solver.config().tolerance, 1e-6);
        assert_eq!(solver.config().max_iterations, 100);
        assert_eq!(solver.bracket(), (0.0001, 1.0));
        assert_eq!(solver.method(), YieldMethod::Brent);
        assert_eq!(solver.initial_guess(), 0.05);
    }

    #[test]
    fn test_brent_and_bisection_agree() {
        let bond = reference_bond();
        let price = bond.price(0.045);

        let brent = YieldSolver::new().solve(&bond, price).unwrap();
        let bisection = YieldSolver::new()
            .with_method(YieldMethod::Bisection)
            .solve(&bond, price)
            .unwrap();

        assert_relative_eq!(brent.yield_value, 0.045, epsilon = 1e-5);
        assert_relative_eq!(bisection.yield_value, 0.045, epsilon = 1e-5);
        assert!(brent.iterations <= bisection.iterations);
    }

    #[test]
    fn test_initial_guess_does_not_change_result() {
        let bond = reference_bond();
        let price = bond.price(0.07);

        let a = YieldSolver::new().with_initial_guess(0.01).solve(&bond, price).unwrap();
        let b = YieldSolver::new().with_initial_guess(0.5).solve(&bond, price).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_price_above_bracket_fails() {
        let bond = reference_bond();
        // Needs a negative yield
        let err = YieldSolver::new().solve(&bond, 2000.0).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_price_below_bracket_fails() {
        let bond = reference_bond();
        // Needs a yield above 100%
        let err = YieldSolver::new().solve(&bond, 10.0).unwrap_err();
        assert!(err.is_convergence_failure());
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        let bond = reference_bond();
        let err = YieldSolver::new()
            .with_method(YieldMethod::Bisection)
            .with_max_iterations(3)
            .solve(&bond, bond.price(0.0433))
            .unwrap_err();

        assert!(matches!(
            err,
            BondError::ConvergenceFailure { iterations: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let bond = reference_bond();

        assert!(matches!(
            YieldSolver::new().solve(&bond, f64::NAN),
            Err(BondError::InvalidArgument { .. })
        ));
        assert!(matches!(
            YieldSolver::new().with_bracket(0.5, 0.1).solve(&bond, 1000.0),
            Err(BondError::InvalidArgument { .. })
        ));
        assert!(matches!(
            YieldSolver::new().with_tolerance(-1.0).solve(&bond, 1000.0),
            Err(BondError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_custom_bracket_reaches_negative_yield() {
        let bond = reference_bond();
        let price = bond.price(-0.01);

        let result = YieldSolver::new()
            .with_bracket(-0.05, 0.5)
            .solve(&bond, price)
            .unwrap();

        assert_relative_eq!(result.yield_value, -0.01, epsilon = 1e-5);
    }
}
