use anyhow::Result;

use crate::model::QuoteRow;

/// Print an example quote table as CSV to stdout.
pub fn run() -> Result<()> {
    let rows = vec![
        QuoteRow {
            instrument_name: "MSFT".to_string(),
            strike_price: "300".to_string(),
            side: "CE".to_string(),
            bid_ask: "5.25".to_string(),
        },
        QuoteRow {
            instrument_name: "MSFT".to_string(),
            strike_price: "310".to_string(),
            side: "PE".to_string(),
            bid_ask: "4.80".to_string(),
        },
    ];

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
