//! Duration calculations.
//!
//! ## Formula
//!
//! ```text
//! D_mac = Σ(t_i × PV(CF_i)) / P
//! D_mod = D_mac / (1 + y/f)
//! ```
//!
//! where:
//! - t_i = time to cash flow i (in years)
//! - PV(CF_i) = present value of cash flow i at the flat yield
//! - P = bond price (sum of all PVs)

use crate::cashflows::CashFlowSchedule;
use crate::pricing::discount_factor;

/// Macaulay duration in years.
///
/// Divides by the price without a zero check; a yield at which the bond is
/// worthless has no meaningful duration.
pub fn macaulay_duration(schedule: &CashFlowSchedule, yield_rate: f64) -> f64 {
    let freq = schedule.frequency();

    let (weighted_sum, price) = schedule.iter().fold((0.0, 0.0), |(weighted, pv), cf| {
        let cf_pv = cf.amount * discount_factor(yield_rate, freq, cf.time);
        (weighted + cf.time * cf_pv, pv + cf_pv)
    });

    weighted_sum / price
}

/// Modified duration in years.
pub fn modified_duration(schedule: &CashFlowSchedule, yield_rate: f64) -> f64 {
    let freq = f64::from(schedule.frequency());
    macaulay_duration(schedule, yield_rate) / (1.0 + yield_rate / freq)
}
