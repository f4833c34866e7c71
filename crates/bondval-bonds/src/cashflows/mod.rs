//! Cash flow generation.
//!
//! A fixed-coupon bond pays `face × rate / frequency` every period and the
//! principal together with the last coupon. Payment times are measured in
//! years from today, `i / frequency` for period `i`.

mod schedule;

pub use schedule::{CashFlow, CashFlowKind, CashFlowSchedule};
