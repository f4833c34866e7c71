//! Yield-to-maturity command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondval_bonds::pricing::{
    YieldResult, YieldSolver, DEFAULT_YTM_MAX_ITERATIONS, DEFAULT_YTM_TOLERANCE,
};
use bondval_bonds::types::{BondTerms, YieldMethod};

use crate::cli::{MethodArg, OutputFormat};
use crate::commands::{terms_rows, validate_price, TermsArgs};
use crate::output::{print_header, print_json, print_key_values, KeyValue};

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    #[command(flatten)]
    pub terms: TermsArgs,

    /// Market price to solve for
    #[arg(short, long)]
    pub price: f64,

    /// Convergence tolerance on the yield
    #[arg(long, env = "BONDVAL_TOLERANCE", default_value_t = DEFAULT_YTM_TOLERANCE)]
    pub tolerance: f64,

    /// Maximum solver iterations
    #[arg(long, env = "BONDVAL_MAX_ITERATIONS", default_value_t = DEFAULT_YTM_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Root-finding method
    #[arg(long, value_enum, default_value = "brent")]
    pub method: MethodArg,
}

/// Full ytm command output.
#[derive(Debug, Serialize)]
pub struct YtmReport {
    pub terms: BondTerms,
    pub market_price: f64,
    pub method: YieldMethod,
    #[serde(flatten)]
    pub result: YieldResult,
}

/// Execute the ytm command.
pub fn execute(args: YtmArgs, format: OutputFormat) -> Result<()> {
    let bond = args.terms.bond()?;
    let market_price = validate_price(args.price)?;
    let method = YieldMethod::from(args.method);

    let solver = YieldSolver::new()
        .with_method(method)
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations);

    let result = bond.solve_ytm(market_price, &solver)?;
    tracing::debug!(
        "ytm {} after {} iterations",
        result.yield_value,
        result.iterations
    );

    let report = YtmReport {
        terms: *bond.terms(),
        market_price,
        method,
        result,
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Minimal => {
            println!("{:.10}", report.result.yield_value);
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header("Yield to Maturity");
            }

            let mut rows = terms_rows(&bond);
            rows.push(KeyValue::separator());
            rows.push(KeyValue::from_f64("Price (Input)", market_price, 6));
            rows.push(KeyValue::from_percent("Yield to Maturity", result.yield_value));
            rows.push(KeyValue::from_f64("Yield (Decimal)", result.yield_value, 10));
            rows.push(KeyValue::new("Method", method.to_string()));
            rows.push(KeyValue::new("Iterations", result.iterations.to_string()));
            rows.push(KeyValue::new("Residual", format!("{:.3e}", result.residual)));

            print_key_values(&rows, format)
        }
    }
}
