//! Cash flow schedule generation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::BondTerms;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A single scheduled payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// One-based period index.
    pub period: u32,
    /// Time of payment in years (`period / frequency`).
    pub time: f64,
    /// Amount paid.
    pub amount: f64,
    /// Type of cash flow.
    pub kind: CashFlowKind,
}

/// Ordered cash flows of a regular fixed-coupon bond.
///
/// One entry per coupon date; the last entry bundles the principal.
///
/// ```rust
/// use bondval_bonds::cashflows::CashFlowSchedule;
/// use bondval_bonds::types::BondTerms;
///
/// let schedule = CashFlowSchedule::build(&BondTerms::new(1000.0, 0.06, 2.0, 2));
/// assert_eq!(schedule.times(), vec![0.5, 1.0, 1.5, 2.0]);
/// assert_eq!(schedule.amounts(), vec![30.0, 30.0, 30.0, 1030.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    frequency: u32,
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Builds the schedule for the given terms.
    ///
    /// Terms are expected to be validated; an empty schedule comes back for
    /// terms with no full coupon period.
    pub fn build(terms: &BondTerms) -> Self {
        let periods = terms.periods();
        let coupon = terms.coupon_amount();
        let freq = f64::from(terms.coupon_frequency);

        let flows = (1..=periods)
            .map(|period| {
                let is_last = period == periods;
                CashFlow {
                    period,
                    time: f64::from(period) / freq,
                    amount: if is_last {
                        coupon + terms.face_value
                    } else {
                        coupon
                    },
                    kind: if is_last {
                        CashFlowKind::CouponAndPrincipal
                    } else {
                        CashFlowKind::Coupon
                    },
                }
            })
            .collect();

        Self {
            frequency: terms.coupon_frequency,
            flows,
        }
    }

    /// Payments per year the schedule was built with.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The cash flows in payment order.
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Iterates over the cash flows.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Payment times in years.
    pub fn times(&self) -> Vec<f64> {
        self.flows.iter().map(|cf| cf.time).collect()
    }

    /// Payment amounts.
    pub fn amounts(&self) -> Vec<f64> {
        self.flows.iter().map(|cf| cf.amount).collect()
    }

    /// Number of cash flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// True when there are no cash flows.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Sum of all undiscounted payments.
    pub fn total(&self) -> f64 {
        self.flows.iter().map(|cf| cf.amount).sum()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
