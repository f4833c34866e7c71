//! Convexity calculation.
//!
//! ## Formula
//!
//! ```text
//! C = Σ(i × (i + 1) × CF_i / (1 + y/f)^(i + 2)) / (P_adj × f²)
//! P_adj = Σ CF_i / (1 + y/f)^i
//! ```
//!
//! The powers use the period index `i` directly, whereas pricing uses
//! `f × t_i`. The two agree only for annual bonds; for other frequencies the
//! index-based convention is kept as is.

use crate::cashflows::CashFlowSchedule;

/// Convexity at a flat yield.
pub fn convexity(schedule: &CashFlowSchedule, yield_rate: f64) -> f64 {
    let freq = f64::from(schedule.frequency());
    let growth = 1.0 + yield_rate / freq;

    let price_adjusted: f64 = schedule
        .iter()
        .map(|cf| cf.amount / growth.powf(f64::from(cf.period)))
        .sum();

    let convexity_sum: f64 = schedule
        .iter()
        .map(|cf| {
            let i = f64::from(cf.period);
            i * (i + 1.0) * cf.amount / growth.powf(i + 2.0)
        })
        .sum();

    convexity_sum / (price_adjusted * freq * freq)
}

/// Calculate price change including both duration and convexity effects.
///
/// # Formula
///
/// ```text
/// ΔP ≈ -D_mod × P × Δy + (1/2) × C × P × (Δy)²
/// ```
pub fn price_change_with_convexity(
    mod_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    let duration_effect = -mod_duration * price * yield_change;
    let convexity_effect = 0.5 * convexity * price * yield_change.powi(2);
    duration_effect + convexity_effect
}
