use clap::Parser;

use option_scan::cli::{Cli, Command};
use option_scan::{example, fetch, metrics, scan};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            query,
            side,
            output,
        } => fetch::run(&query, side, output.as_ref()),
        Command::Metrics {
            file,
            lot_size,
            margin_pct,
            output,
        } => metrics::run(&file, lot_size, margin_pct, output.as_ref()),
        Command::Scan {
            query,
            side,
            lot_size,
            margin_pct,
            output,
        } => scan::run(&query, side, lot_size, margin_pct, output.as_ref()),
        Command::Example => example::run(),
    }
}
