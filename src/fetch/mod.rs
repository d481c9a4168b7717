pub mod alphavantage;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{QuoteRow, Side};
use crate::table;

const API_KEY_ENV: &str = "RAPIDAPI_KEY";

#[derive(Serialize)]
struct FetchManifest {
    query: String,
    side: String,
    rows: usize,
    fetched_at: String,
}

/// One blocking SYMBOL_SEARCH call: reads the API key from the environment,
/// spins up a runtime, issues the request, returns the quote table.
pub fn fetch_quotes(query: &str, side: Side) -> Result<Vec<QuoteRow>> {
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} is not set; export your RapidAPI key first"))?;

    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(concat!("option-scan/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("creating HTTP client")?;

        alphavantage::search_symbols(&client, &api_key, query, side).await
    })
}

/// Run the search command: fetch, print the quote table, optionally write it
/// to CSV with a sibling manifest.json.
pub fn run(query: &str, side: Side, output: Option<&PathBuf>) -> Result<()> {
    let rows = fetch_quotes(query, side)?;

    eprintln!(
        "  NOTE: SYMBOL_SEARCH carries no option chain; strike_price holds the \
         ticker symbol and bid/ask holds the search match score."
    );
    if rows.is_empty() {
        println!("No symbol data available for keyword '{query}'.");
    }
    table::print_quotes(&rows);

    if let Some(path) = output {
        write_output(path, query, side, &rows)?;
        println!("\nWrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

fn write_output(path: &Path, query: &str, side: Side, rows: &[QuoteRow]) -> Result<()> {
    table::write_quotes(path, rows)?;

    let manifest = FetchManifest {
        query: query.to_string(),
        side: side.tag().to_string(),
        rows: rows.len(),
        fetched_at: chrono::Utc::now().to_rfc3339(),
    };
    let manifest_path = path.with_extension("manifest.json");
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&manifest_path, json)
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    Ok(())
}
