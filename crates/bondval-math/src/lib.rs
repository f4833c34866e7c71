//! # bondval Math
//!
//! Numerical building blocks for the bondval valuation engine.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketed root-finding (Brent, Bisection)
//! - **Configuration**: Tolerance and iteration limits shared by all solvers
//!
//! Every solver reports how it finished: a [`SolverResult`](solvers::SolverResult)
//! with the root, iteration count and final residual, or a
//! [`MathError`] describing why no root was accepted.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, brent, BisectionSolver, BracketedSolver, BrentSolver, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
