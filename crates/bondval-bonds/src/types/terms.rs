//! Contractual terms of a fixed-coupon bond.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BondError, BondResult};

/// The four contractual terms that fully describe a bond.
///
/// `BondTerms` is plain data: it can be deserialized from a terms file and
/// serialized next to analytics output. Turning it into a [`crate::Bond`]
/// validates it.
///
/// ```rust
/// use bondval_bonds::types::BondTerms;
///
/// let terms = BondTerms::new(1000.0, 0.06, 5.0, 2);
/// assert_eq!(terms.periods(), 10);
/// assert_eq!(terms.coupon_amount(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual nominal coupon rate as a decimal (0.06 = 6%).
    pub coupon_rate: f64,
    /// Years until the final payment.
    pub maturity: f64,
    /// Coupon payments per year.
    pub coupon_frequency: u32,
}

impl BondTerms {
    /// Creates a new set of terms. No validation happens here.
    #[must_use]
    pub fn new(face_value: f64, coupon_rate: f64, maturity: f64, coupon_frequency: u32) -> Self {
        Self {
            face_value,
            coupon_rate,
            maturity,
            coupon_frequency,
        }
    }

    /// Number of payment dates, `floor(maturity × coupon_frequency)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn periods(&self) -> u32 {
        (self.maturity * f64::from(self.coupon_frequency)).floor() as u32
    }

    /// Coupon paid each period, excluding principal.
    pub fn coupon_amount(&self) -> f64 {
        self.face_value * self.coupon_rate / f64::from(self.coupon_frequency)
    }

    /// Checks every term against its domain.
    pub fn validate(&self) -> BondResult<()> {
        if self.coupon_frequency == 0 {
            return Err(BondError::invalid_argument(
                "coupon frequency must be a positive integer",
            ));
        }
        if !self.face_value.is_finite() || self.face_value <= 0.0 {
            return Err(BondError::invalid_argument(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(BondError::invalid_argument(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(BondError::invalid_argument(format!(
                "maturity must be positive, got {}",
                self.maturity
            )));
        }

        let periods = self.maturity * f64::from(self.coupon_frequency);
        if periods < 1.0 {
            return Err(BondError::invalid_argument(format!(
                "maturity {} is shorter than one coupon period (frequency {})",
                self.maturity, self.coupon_frequency
            )));
        }
        if periods > f64::from(u32::MAX) {
            return Err(BondError::invalid_argument(format!(
                "maturity {} yields too many coupon periods",
                self.maturity
            )));
        }
        Ok(())
    }
}

impl fmt::Display for BondTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} face, {:.3}% coupon, {}y, {}x/year",
            self.face_value,
            self.coupon_rate * 100.0,
            self.maturity,
            self.coupon_frequency
        )
    }
}
