//! Reprice command implementation.
//!
//! Prices a bond at a base yield shifted by each of a list of shocks.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondval_bonds::scenario::{self, ScenarioResult, DEFAULT_BASE_YIELD, DEFAULT_SHOCKS};

use crate::cli::OutputFormat;
use crate::commands::{validate_yield, TermsArgs};
use crate::output::{format_metric, format_price, print_header, print_output};

/// Arguments for the reprice command.
#[derive(Args, Debug)]
pub struct RepriceArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Base yield as a decimal
    #[arg(short, long, default_value_t = DEFAULT_BASE_YIELD, allow_negative_numbers = true)]
    pub base_yield: f64,

    /// Comma-separated yield shocks as decimals
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = DEFAULT_SHOCKS
    )]
    pub shocks: Vec<f64>,
}

/// One row of the repricing table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "Shock", display_with = "display_shock")]
    pub shock: f64,
    #[tabled(rename = "Yield", display_with = "display_yield")]
    pub yield_rate: f64,
    #[tabled(rename = "Price", display_with = "format_price")]
    pub price: f64,
    #[tabled(rename = "Macaulay", display_with = "format_metric")]
    pub macaulay_duration: f64,
    #[tabled(rename = "Modified", display_with = "format_metric")]
    pub modified_duration: f64,
    #[tabled(rename = "Convexity", display_with = "format_metric")]
    pub convexity: f64,
}

impl From<ScenarioResult> for ScenarioRow {
    fn from(result: ScenarioResult) -> Self {
        Self {
            shock: result.shock,
            yield_rate: result.yield_rate,
            price: result.price,
            macaulay_duration: result.macaulay_duration,
            modified_duration: result.modified_duration,
            convexity: result.convexity,
        }
    }
}

fn display_shock(value: &f64) -> String {
    crate::output::format_bps(*value)
}

fn display_yield(value: &f64) -> String {
    crate::output::format_percent(*value)
}

/// Execute the reprice command.
pub fn execute(args: RepriceArgs, format: OutputFormat) -> Result<()> {
    let bond = args.terms.bond()?;
    let base_yield = validate_yield(args.base_yield)?;
    for &shock in &args.shocks {
        validate_yield(base_yield + shock)?;
    }

    tracing::debug!(
        "repricing at base {base_yield} with {} shocks",
        args.shocks.len()
    );

    let rows: Vec<ScenarioRow> = scenario::reprice(&bond, base_yield, &args.shocks)
        .into_iter()
        .map(ScenarioRow::from)
        .collect();

    if format == OutputFormat::Table {
        print_header(&format!("Repricing: {bond}"));
    }
    print_output(&rows, format)
}
