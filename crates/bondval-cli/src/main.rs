//! bondval CLI - Command-line valuation of fixed-coupon bonds.
//!
//! # Usage
//!
//! ```bash
//! # Repricing table for the default 6% 5y semi-annual bond
//! bondval reprice --base-yield 0.03 --shocks=-0.01,0,0.01
//!
//! # Price and sensitivities at a yield
//! bondval price --face 1000 --coupon 0.08 --maturity 4 --frequency 1 --yield 0.05
//!
//! # Yield to maturity from a market price
//! bondval ytm --face 950 --coupon 0.05 --maturity 5 --frequency 1 --price 1100
//!
//! # Cash flow schedule, terms from a file
//! bondval cashflows --terms bond.json --yield 0.04 --format csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Reprice(args) => commands::reprice::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Ytm(args) => commands::ytm::execute(args, format)?,
        Commands::Cashflows(args) => commands::cashflows::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV on stdout stay parseable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bondval=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bondval=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
