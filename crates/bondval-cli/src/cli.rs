//! CLI argument definitions.

use bondval_bonds::types::YieldMethod;
use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CashflowsArgs, PriceArgs, RepriceArgs, YtmArgs};

/// bondval - Fixed-coupon bond valuation
#[derive(Parser)]
#[command(name = "bondval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Reprice a bond across a set of parallel yield shocks
    Reprice(RepriceArgs),

    /// Price a bond at a yield, with duration, convexity and DV01
    Price(PriceArgs),

    /// Solve for the yield to maturity implied by a market price
    Ytm(YtmArgs),

    /// Show the cash flow schedule, optionally with present values
    Cashflows(CashflowsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

/// Root-finding method for the yield solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MethodArg {
    /// Brent's method
    #[default]
    Brent,
    /// Interval bisection
    Bisection,
}

impl From<MethodArg> for YieldMethod {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Brent => YieldMethod::Brent,
            MethodArg::Bisection => YieldMethod::Bisection,
        }
    }
}
