//! Flat-yield discounting.
//!
//! The yield is a nominal annual rate compounded `frequency` times a year:
//!
//! ```text
//! d(t) = 1 / (1 + y/f)^(f × t)
//! P    = Σ CF_i × d(t_i)
//! ```

use crate::cashflows::CashFlowSchedule;

/// Discount factor for a payment `time` years away.
///
/// `yield_rate = -frequency` is not guarded and produces a non-finite value.
pub fn discount_factor(yield_rate: f64, frequency: u32, time: f64) -> f64 {
    let freq = f64::from(frequency);
    1.0 / (1.0 + yield_rate / freq).powf(freq * time)
}

/// Present value of every cash flow, in schedule order.
pub fn present_values(schedule: &CashFlowSchedule, yield_rate: f64) -> Vec<f64> {
    schedule
        .iter()
        .map(|cf| cf.amount * discount_factor(yield_rate, schedule.frequency(), cf.time))
        .collect()
}

/// Price of the schedule at a flat yield.
pub fn present_value(schedule: &CashFlowSchedule, yield_rate: f64) -> f64 {
    schedule
        .iter()
        .map(|cf| cf.amount * discount_factor(yield_rate, schedule.frequency(), cf.time))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BondTerms;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor() {
        assert_relative_eq!(discount_factor(0.05, 1, 1.0), 1.0 / 1.05, epsilon = 1e-15);
        assert_relative_eq!(discount_factor(0.04, 2, 1.0), 1.0 / 1.02_f64.powi(2), epsilon = 1e-15);
        assert_eq!(discount_factor(0.0, 4, 10.0), 1.0);
    }

    #[test]
    fn test_present_value_matches_sum() {
        let schedule = CashFlowSchedule::build(&BondTerms::new(1000.0, 0.06, 5.0, 2));
        let pvs = present_values(&schedule, 0.03);

        assert_eq!(pvs.len(), 10);
        assert_relative_eq!(pvs.iter().sum::<f64>(), present_value(&schedule, 0.03), epsilon = 1e-9);
        assert_relative_eq!(present_value(&schedule, 0.03), 1138.33, epsilon = 0.005);
    }

    #[test]
    fn test_par_bond_prices_at_face() {
        let schedule = CashFlowSchedule::build(&BondTerms::new(1000.0, 0.05, 10.0, 2));
        assert_relative_eq!(present_value(&schedule, 0.05), 1000.0, epsilon = 1e-9);
    }
}
