//! Yield sensitivities of a fixed-coupon bond.
//!
//! - **Macaulay Duration**: PV-weighted average time to cash receipt
//! - **Modified Duration**: Price sensitivity measure (∂P/∂y × 1/P)
//! - **Convexity**: Second-order price sensitivity
//! - **DV01**: Price change for a one basis point move

mod convexity;
mod duration;

pub use convexity::{convexity, price_change_with_convexity};
pub use duration::{macaulay_duration, modified_duration};

use serde::Serialize;

/// One basis point as a decimal yield change.
pub const ONE_BASIS_POINT: f64 = 0.0001;

/// DV01 from modified duration and price.
pub fn dv01_from_duration(mod_duration: f64, price: f64) -> f64 {
    mod_duration * price * ONE_BASIS_POINT
}

/// Price and sensitivities of a bond at one yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondAnalytics {
    /// The yield the metrics were computed at.
    pub yield_rate: f64,
    /// Present value of all cash flows.
    pub price: f64,
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration in years.
    pub modified_duration: f64,
    /// Convexity.
    pub convexity: f64,
    /// Dollar value of one basis point.
    pub dv01: f64,
}
