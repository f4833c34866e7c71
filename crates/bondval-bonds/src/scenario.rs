//! Parallel-shift scenario repricing.
//!
//! Reprices a bond at `base_yield + shock` for each shock and collects the
//! price and sensitivities. Each scenario only reads the bond, so they run
//! on the rayon pool.

use rayon::prelude::*;
use serde::Serialize;

use crate::instruments::Bond;

/// Yield shocks applied when none are given.
pub const DEFAULT_SHOCKS: [f64; 5] = [-0.01, -0.005, 0.0, 0.005, 0.01];

/// Base yield used when none is given.
pub const DEFAULT_BASE_YIELD: f64 = 0.03;

/// Analytics for one shocked yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResult {
    /// Shift added to the base yield.
    pub shock: f64,
    /// `base_yield + shock`.
    pub yield_rate: f64,
    /// Price at the shocked yield.
    pub price: f64,
    /// Macaulay duration.
    pub macaulay_duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity.
    pub convexity: f64,
}

impl ScenarioResult {
    /// Evaluates a single scenario.
    pub fn evaluate(bond: &Bond, base_yield: f64, shock: f64) -> Self {
        let yield_rate = base_yield + shock;
        Self {
            shock,
            yield_rate,
            price: bond.price(yield_rate),
            macaulay_duration: bond.macaulay_duration(yield_rate),
            modified_duration: bond.modified_duration(yield_rate),
            convexity: bond.convexity(yield_rate),
        }
    }
}

/// Reprices `bond` for every shock. Results keep the order of `shocks`.
pub fn reprice(bond: &Bond, base_yield: f64, shocks: &[f64]) -> Vec<ScenarioResult> {
    log::debug!(
        "repricing {bond} at base yield {base_yield} for {} shocks",
        shocks.len()
    );

    shocks
        .par_iter()
        .map(|&shock| ScenarioResult::evaluate(bond, base_yield, shock))
        .collect()
}
