//! Price feed response types (CoinDesk BPI format)

use serde::{Deserialize, Serialize};

/// Body of `GET /v1/bpi/currentprice/USD.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPriceResponse {
    pub bpi: Bpi,
}

/// Prices keyed by currency; only USD is read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bpi {
    #[serde(rename = "USD")]
    pub usd: CurrencyRate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRate {
    #[serde(default)]
    pub code: Option<String>,

    /// Formatted price, e.g. "50,000.1234"
    #[serde(default)]
    pub rate: Option<String>,

    pub rate_float: f64,
}

impl CurrentPriceResponse {
    pub fn usd_price(&self) -> f64 {
        self.bpi.usd.rate_float
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coindesk_body() {
        let body = r#"{
            "time": {"updated": "May 1, 2024 12:00:00 UTC"},
            "disclaimer": "...",
            "bpi": {
                "USD": {
                    "code": "USD",
                    "rate": "50,000.1200",
                    "description": "United States Dollar",
                    "rate_float": 50000.12
                }
            }
        }"#;

        let parsed: CurrentPriceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.usd_price(), 50000.12);
        assert_eq!(parsed.bpi.usd.code.as_deref(), Some("USD"));
    }

    #[test]
    fn test_missing_rate_float_is_error() {
        let body = r#"{"bpi": {"USD": {"code": "USD", "rate": "50,000"}}}"#;
        assert!(serde_json::from_str::<CurrentPriceResponse>(body).is_err());
    }
}
