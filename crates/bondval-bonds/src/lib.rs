//! # bondval Bonds
//!
//! Valuation of fixed-coupon bonds under a flat, frequency-compounded yield.
//!
//! This crate provides:
//!
//! - **Instruments**: [`Bond`], an immutable fixed-coupon bond with its cash flow schedule
//! - **Pricing**: Present value and yield-to-maturity by bracketed root-finding
//! - **Risk**: Macaulay and modified duration, convexity, DV01
//! - **Scenarios**: Parallel repricing across a set of yield shocks
//!
//! ## Example
//!
//! ```rust
//! use bondval_bonds::prelude::*;
//!
//! let bond = Bond::builder()
//!     .face_value(1000.0)
//!     .coupon_rate(0.06)
//!     .maturity(5.0)
//!     .coupon_frequency(2)
//!     .build()
//!     .unwrap();
//!
//! let analytics = bond.analytics(0.03);
//! assert!((analytics.price - 1138.33).abs() < 0.005);
//! assert!(analytics.modified_duration < analytics.macaulay_duration);
//!
//! let table = reprice(&bond, DEFAULT_BASE_YIELD, &DEFAULT_SHOCKS);
//! assert_eq!(table.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;
pub mod scenario;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{CashFlow, CashFlowKind, CashFlowSchedule};

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{Bond, BondBuilder};

    // Pricing
    pub use crate::pricing::{YieldResult, YieldSolver};

    // Risk
    pub use crate::risk::BondAnalytics;

    // Scenarios
    pub use crate::scenario::{reprice, ScenarioResult, DEFAULT_BASE_YIELD, DEFAULT_SHOCKS};

    // Types
    pub use crate::types::{BondTerms, YieldMethod};
}

pub use error::{BondError, BondResult};
pub use instruments::Bond;
