//! Bond instrument types.
//!
//! - [`Bond`]: fixed-coupon bond with a regular payment frequency
//! - [`BondBuilder`]: named-field construction of a [`Bond`]

mod fixed_coupon;

pub use fixed_coupon::{Bond, BondBuilder};
