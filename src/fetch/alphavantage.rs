use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{QuoteRow, Side};

const API_URL: &str = "https://alpha-vantage.p.rapidapi.com/query";
const API_HOST: &str = "alpha-vantage.p.rapidapi.com";

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "bestMatches", default)]
    best_matches: Vec<BestMatch>,
}

#[derive(Debug, Deserialize)]
struct BestMatch {
    #[serde(rename = "1. symbol", default)]
    symbol: String,
    #[serde(rename = "2. name", default)]
    name: String,
    #[serde(rename = "9. matchScore", default)]
    match_score: String,
}

// ── Public API ───────────────────────────────────────────────────────

/// Run a SYMBOL_SEARCH query and shape the matches into quote rows.
///
/// Every row gets the caller's `side` tag. SYMBOL_SEARCH returns no option
/// chain, so the ticker symbol lands in `strike_price` and the relevance
/// match score in `bid/ask` — placeholder columns, see the NOTE printed by
/// the fetch runner.
pub async fn search_symbols(
    client: &reqwest::Client,
    api_key: &str,
    query: &str,
    side: Side,
) -> Result<Vec<QuoteRow>> {
    let body = client
        .get(API_URL)
        .header("x-rapidapi-key", api_key)
        .header("x-rapidapi-host", API_HOST)
        .query(&[
            ("function", "SYMBOL_SEARCH"),
            ("keywords", query),
            ("datatype", "json"),
        ])
        .send()
        .await
        .with_context(|| format!("requesting symbol search for '{query}'"))?
        .error_for_status()
        .context("symbol search request failed")?
        .text()
        .await
        .context("reading symbol search response body")?;

    parse_search_response(&body, side)
}

/// Parse a SYMBOL_SEARCH response body. An absent or empty `bestMatches`
/// array yields zero rows, not an error; missing fields within a match
/// become empty strings.
pub fn parse_search_response(body: &str, side: Side) -> Result<Vec<QuoteRow>> {
    let response: SearchResponse =
        serde_json::from_str(body).context("decoding symbol search response")?;

    let rows = response
        .best_matches
        .into_iter()
        .map(|m| QuoteRow {
            instrument_name: m.name,
            strike_price: m.symbol,
            side: side.tag().to_string(),
            bid_ask: m.match_score,
        })
        .collect();

    Ok(rows)
}
