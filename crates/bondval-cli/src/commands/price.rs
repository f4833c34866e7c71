//! Price command implementation.
//!
//! Prices a bond at a yield and reports its sensitivities. With `--shift`,
//! also compares the duration-convexity estimate of a yield move against a
//! full reprice.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondval_bonds::risk::BondAnalytics;
use bondval_bonds::types::BondTerms;
use bondval_bonds::Bond;

use crate::cli::OutputFormat;
use crate::commands::{terms_rows, validate_yield, TermsArgs};
use crate::output::{format_bps, print_header, print_json, print_key_values, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Yield to maturity as a decimal (0.03 for 3%)
    #[arg(short, long = "yield", allow_negative_numbers = true)]
    pub yield_rate: f64,

    /// Yield shift for a convexity-adjusted price change estimate
    #[arg(long, allow_negative_numbers = true)]
    pub shift: Option<f64>,
}

/// Estimated against actual price change for a yield shift.
#[derive(Debug, Serialize)]
pub struct ShiftEstimate {
    pub shift: f64,
    pub estimated_change: f64,
    pub estimated_price: f64,
    pub repriced: f64,
}

/// Full price command output.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub terms: BondTerms,
    #[serde(flatten)]
    pub analytics: BondAnalytics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftEstimate>,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let bond = args.terms.bond()?;
    let yield_rate = validate_yield(args.yield_rate)?;

    let analytics = bond.analytics(yield_rate);
    tracing::debug!("price {} at yield {yield_rate}", analytics.price);

    let shift = match args.shift {
        Some(shift) => {
            validate_yield(yield_rate + shift)?;
            let estimated_change = bond.price_change_estimate(yield_rate, shift);
            Some(ShiftEstimate {
                shift,
                estimated_change,
                estimated_price: analytics.price + estimated_change,
                repriced: bond.price(yield_rate + shift),
            })
        }
        None => None,
    };

    let report = PriceReport {
        terms: *bond.terms(),
        analytics,
        shift,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Minimal => {
            println!("{:.6}", report.analytics.price);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header("Bond Pricing Results");
            }
            print_key_values(&report_rows(&bond, &report), format)
        }
    }
}

fn report_rows(bond: &Bond, report: &PriceReport) -> Vec<KeyValue> {
    let a = &report.analytics;
    let mut rows = terms_rows(bond);

    rows.push(KeyValue::separator());
    rows.push(KeyValue::from_percent("Yield", a.yield_rate));
    rows.push(KeyValue::from_f64("Price", a.price, 6));
    rows.push(KeyValue::from_f64("Macaulay Duration", a.macaulay_duration, 6));
    rows.push(KeyValue::from_f64("Modified Duration", a.modified_duration, 6));
    rows.push(KeyValue::from_f64("Convexity", a.convexity, 6));
    rows.push(KeyValue::from_f64("DV01", a.dv01, 6));

    if let Some(s) = &report.shift {
        rows.push(KeyValue::separator());
        rows.push(KeyValue::new("Shift", format_bps(s.shift)));
        rows.push(KeyValue::from_f64("Estimated Change", s.estimated_change, 6));
        rows.push(KeyValue::from_f64("Estimated Price", s.estimated_price, 6));
        rows.push(KeyValue::from_f64("Repriced", s.repriced, 6));
    }

    rows
}
