use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::model::Side;

/// Symbol search + option metrics — fetch instrument quotes from the
/// Alpha Vantage search API and derive margin/premium columns.
#[derive(Parser)]
#[command(name = "option-scan", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search symbols and emit a quote table (CSV columns:
    /// instrument_name, strike_price, side, bid/ask)
    Search {
        /// Search keyword, e.g. "microsoft"
        query: String,

        /// Option side tag applied to every row: CE (call) or PE (put)
        #[arg(long, default_value = "CE")]
        side: Side,

        /// Write the quote table to this CSV file (plus a manifest.json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Compute margin_required and premium_earned over a quote CSV
    Metrics {
        /// Path to the quote CSV file
        file: PathBuf,

        /// Underlying units per contract
        #[arg(long, default_value = "100.0")]
        lot_size: f64,

        /// Fraction of strike required as collateral
        #[arg(long, default_value = "0.2")]
        margin_pct: f64,

        /// Write the metrics table to this CSV file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Search symbols and pipe the result straight into the metrics
    /// calculator
    Scan {
        /// Search keyword, e.g. "microsoft"
        query: String,

        /// Option side tag applied to every row: CE (call) or PE (put)
        #[arg(long, default_value = "CE")]
        side: Side,

        /// Underlying units per contract
        #[arg(long, default_value = "100.0")]
        lot_size: f64,

        /// Fraction of strike required as collateral
        #[arg(long, default_value = "0.2")]
        margin_pct: f64,

        /// Write the metrics table to this CSV file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Output an example quote CSV to stdout
    Example,
}
