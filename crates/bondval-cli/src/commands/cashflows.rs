//! Cashflows command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{validate_yield, TermsArgs};
use crate::output::{format_price, print_header, print_output};

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Discount each cash flow at this yield (decimal)
    #[arg(short, long = "yield", allow_negative_numbers = true)]
    pub yield_rate: Option<f64>,
}

/// One scheduled payment.
#[derive(Debug, Serialize, Tabled)]
pub struct CashFlowRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Time (y)", display_with = "display_time")]
    pub time: f64,
    #[tabled(rename = "Amount", display_with = "format_price")]
    pub amount: f64,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "PV", display_with = "display_pv")]
    pub present_value: Option<f64>,
}

fn display_time(value: &f64) -> String {
    format!("{:.4}", value)
}

fn display_pv(value: &Option<f64>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), format_price)
}

/// Execute the cashflows command.
pub fn execute(args: CashflowsArgs, format: OutputFormat) -> Result<()> {
    let bond = args.terms.bond()?;
    let yield_rate = args.yield_rate.map(validate_yield).transpose()?;

    let present_values = yield_rate.map(|y| bond.present_values(y));
    tracing::debug!("{} cash flows", bond.cash_flows().len());

    let rows: Vec<CashFlowRow> = bond
        .cash_flows()
        .iter()
        .enumerate()
        .map(|(i, cf)| CashFlowRow {
            period: cf.period,
            time: cf.time,
            amount: cf.amount,
            kind: cf.kind.to_string(),
            present_value: present_values.as_ref().map(|pvs| pvs[i]),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Cash Flows: {bond}"));
    }
    print_output(&rows, format)?;

    if format == OutputFormat::Table {
        let total: f64 = rows.iter().map(|r| r.amount).sum();
        match yield_rate {
            Some(y) => println!(
                "Total {:.6}, price {:.6} at {}",
                total,
                bond.price(y),
                crate::output::format_percent(y)
            ),
            None => println!("Total {:.6}", total),
        }
    }
    Ok(())
}
