use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{MetricsRow, QuoteRow};

const METRICS_HEADERS: [&str; 6] = [
    "instrument_name",
    "strike_price",
    "side",
    "bid/ask",
    "margin_required",
    "premium_earned",
];

/// Read a quote table from CSV.
pub fn read_quotes(path: &Path) -> Result<Vec<QuoteRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening quote CSV {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: QuoteRow =
            record.with_context(|| format!("parsing quote CSV {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write a quote table to CSV. A zero-row table still gets its header line
/// so the four-column schema survives the round trip.
pub fn write_quotes(path: &Path, rows: &[QuoteRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;
    if rows.is_empty() {
        writer.write_record(QuoteRow::HEADERS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a metrics table to CSV, header-only when empty.
pub fn write_metrics(path: &Path, rows: &[MetricsRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV file {}", path.display()))?;
    if rows.is_empty() {
        writer.write_record(METRICS_HEADERS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

// ── Stdout rendering ─────────────────────────────────────────────────

pub fn print_quotes(rows: &[QuoteRow]) {
    println!(
        "{:<40} {:>14} {:>5} {:>10}",
        "instrument_name", "strike_price", "side", "bid/ask"
    );
    for row in rows {
        println!(
            "{:<40} {:>14} {:>5} {:>10}",
            row.instrument_name, row.strike_price, row.side, row.bid_ask
        );
    }
}

pub fn print_metrics(rows: &[MetricsRow]) {
    println!(
        "{:<40} {:>12} {:>5} {:>9} {:>15} {:>14}",
        "instrument_name", "strike_price", "side", "bid/ask", "margin_required", "premium_earned"
    );
    for row in rows {
        println!(
            "{:<40} {:>12} {:>5} {:>9} {:>15} {:>14}",
            row.instrument_name,
            fmt_opt(row.strike_price),
            row.side,
            fmt_opt(row.bid_ask),
            fmt_opt(row.margin_required),
            fmt_opt(row.premium_earned)
        );
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}
