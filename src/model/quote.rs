use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Option side tag as used by the upstream table format.
///
/// Kept as a closed two-variant enum so anything other than `CE`/`PE` is
/// rejected at parse time instead of slipping through as a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "CE")]
    Call,
    #[serde(rename = "PE")]
    Put,
}

#[derive(Debug, Error)]
#[error("unrecognized option side `{0}` (expected CE or PE)")]
pub struct SideError(pub String);

impl FromStr for Side {
    type Err = SideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CE" => Ok(Side::Call),
            "PE" => Ok(Side::Put),
            other => Err(SideError(other.to_string())),
        }
    }
}

impl Side {
    pub fn tag(&self) -> &'static str {
        match self {
            Side::Call => "CE",
            Side::Put => "PE",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One row of the quote table flowing out of the symbol fetcher.
///
/// Numeric columns stay text until the metrics calculator coerces them, and
/// `side` stays raw so rows with junk tags survive a round trip through CSV.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QuoteRow {
    pub instrument_name: String,
    pub strike_price: String,
    pub side: String,
    #[serde(rename = "bid/ask")]
    pub bid_ask: String,
}

impl QuoteRow {
    pub const HEADERS: [&'static str; 4] = ["instrument_name", "strike_price", "side", "bid/ask"];
}

/// A quote row after metric derivation. `None` means the source value did not
/// coerce to a number (or the side tag was unrecognized) and serializes as an
/// empty CSV field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MetricsRow {
    pub instrument_name: String,
    pub strike_price: Option<f64>,
    pub side: String,
    #[serde(rename = "bid/ask")]
    pub bid_ask: Option<f64>,
    pub margin_required: Option<f64>,
    pub premium_earned: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_round_trip() {
        assert_eq!("CE".parse::<Side>().unwrap(), Side::Call);
        assert_eq!("PE".parse::<Side>().unwrap(), Side::Put);
        assert_eq!(Side::Call.tag(), "CE");
        assert_eq!(Side::Put.to_string(), "PE");
    }

    #[test]
    fn test_side_rejects_junk() {
        let err = "XX".parse::<Side>().unwrap_err();
        assert!(err.to_string().contains("XX"));
        // Case-sensitive, matching the upstream tags exactly
        assert!("ce".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
    }
}
