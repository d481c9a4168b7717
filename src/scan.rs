use std::path::PathBuf;

use anyhow::Result;

use crate::metrics::{self, MetricsParams};
use crate::model::Side;
use crate::{fetch, table};

/// Run the scan command: search, then pipe the quote table straight into the
/// metrics calculator.
pub fn run(
    query: &str,
    side: Side,
    lot_size: f64,
    margin_pct: f64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let quotes = fetch::fetch_quotes(query, side)?;

    eprintln!(
        "  NOTE: SYMBOL_SEARCH carries no option chain; strike_price holds the \
         ticker symbol and bid/ask holds the search match score."
    );
    if quotes.is_empty() {
        println!("No symbol data available for keyword '{query}'.");
    }

    let params = MetricsParams {
        lot_size,
        margin_percentage: margin_pct,
    };
    let rows = metrics::calculate_option_metrics(&quotes, &params);

    table::print_metrics(&rows);

    if let Some(path) = output {
        table::write_metrics(path, &rows)?;
        println!("\nWrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}
