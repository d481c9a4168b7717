use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::{MetricsRow, QuoteRow, Side};
use crate::table;

/// Contract sizing inputs for the metric formulas. Deliberately unvalidated:
/// out-of-range lot sizes or margin fractions pass straight through to the
/// arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct MetricsParams {
    pub lot_size: f64,
    pub margin_percentage: f64,
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            lot_size: 100.0,
            margin_percentage: 0.2,
        }
    }
}

/// Derive margin and premium columns for every quote row.
///
/// The input is only borrowed; callers keep their table untouched. Values
/// that fail numeric coercion (and rows with unrecognized side tags) yield
/// missing derived values rather than errors.
pub fn calculate_option_metrics(rows: &[QuoteRow], params: &MetricsParams) -> Vec<MetricsRow> {
    rows.iter()
        .map(|row| {
            let strike = coerce(&row.strike_price);
            let bid_ask = coerce(&row.bid_ask);

            // CE and PE currently share one margin formula; per-side
            // economics are an open gap in the upstream model.
            let margin_required = match row.side.parse::<Side>() {
                Ok(Side::Call) | Ok(Side::Put) => {
                    strike.map(|s| round2(s * params.margin_percentage * params.lot_size))
                }
                Err(err) => {
                    eprintln!("  WARN: {err}; margin_required left missing");
                    None
                }
            };

            let premium_earned = bid_ask.map(|p| round2(p * params.lot_size));

            MetricsRow {
                instrument_name: row.instrument_name.clone(),
                strike_price: strike,
                side: row.side.clone(),
                bid_ask,
                margin_required,
                premium_earned,
            }
        })
        .collect()
}

fn coerce(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the metrics command: read a quote CSV, derive metrics, print, and
/// optionally write the result CSV.
pub fn run(
    input: &Path,
    lot_size: f64,
    margin_pct: f64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let quotes = table::read_quotes(input)?;
    let params = MetricsParams {
        lot_size,
        margin_percentage: margin_pct,
    };
    let rows = calculate_option_metrics(&quotes, &params);

    table::print_metrics(&rows);

    if let Some(path) = output {
        table::write_metrics(path, &rows)?;
        println!("\nWrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, strike: &str, side: &str, bid_ask: &str) -> QuoteRow {
        QuoteRow {
            instrument_name: name.to_string(),
            strike_price: strike.to_string(),
            side: side.to_string(),
            bid_ask: bid_ask.to_string(),
        }
    }

    #[test]
    fn test_call_and_put_metrics() {
        let quotes = vec![
            row("MSFT", "300", "CE", "5.25"),
            row("MSFT", "310", "PE", "4.80"),
        ];
        let out = calculate_option_metrics(&quotes, &MetricsParams::default());

        assert_eq!(out[0].margin_required, Some(6000.00));
        assert_eq!(out[0].premium_earned, Some(525.00));
        assert_eq!(out[1].margin_required, Some(6200.00));
        assert_eq!(out[1].premium_earned, Some(480.00));
    }

    #[test]
    fn test_non_numeric_strike_leaves_margin_missing() {
        let quotes = vec![row("MSFT", "N/A", "CE", "5.25")];
        let out = calculate_option_metrics(&quotes, &MetricsParams::default());

        assert_eq!(out[0].strike_price, None);
        assert_eq!(out[0].margin_required, None);
        assert_eq!(out[0].premium_earned, Some(525.00));
    }

    #[test]
    fn test_unknown_side_leaves_margin_missing() {
        let quotes = vec![row("MSFT", "300", "XX", "5.25")];
        let out = calculate_option_metrics(&quotes, &MetricsParams::default());

        assert_eq!(out[0].margin_required, None);
        assert_eq!(out[0].premium_earned, Some(525.00));
        assert_eq!(out[0].side, "XX");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let quotes = vec![row("MSFT", "333.333", "CE", "1.005")];
        let params = MetricsParams {
            lot_size: 100.0,
            margin_percentage: 0.2,
        };
        let out = calculate_option_metrics(&quotes, &params);

        // 333.333 * 0.2 * 100 = 6666.66
        assert_eq!(out[0].margin_required, Some(6666.66));
        // 1.005 * 100 = 100.5 (already within 2dp)
        assert_eq!(out[0].premium_earned, Some(100.5));
    }

    #[test]
    fn test_out_of_range_params_pass_through() {
        let quotes = vec![row("MSFT", "300", "CE", "5.25")];
        let params = MetricsParams {
            lot_size: -100.0,
            margin_percentage: 1.5,
        };
        let out = calculate_option_metrics(&quotes, &params);

        assert_eq!(out[0].margin_required, Some(-45000.00));
        assert_eq!(out[0].premium_earned, Some(-525.00));
    }
}
