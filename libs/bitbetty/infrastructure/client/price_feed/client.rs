//! HTTP client for the public BTC price feed

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::types::CurrentPriceResponse;
use crate::domain::PriceSource;
use crate::infrastructure::config::PriceFeedConfig;

/// Default price feed URL
pub const PRICE_FEED_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice/USD.json";

#[derive(Error, Debug)]
pub enum PriceFeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Price feed returned {0}: {1}")]
    BadStatus(u16, String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),
}

pub type Result<T> = std::result::Result<T, PriceFeedError>;

/// Fetches the current USD price of BTC
pub struct PriceFeedClient {
    url: String,
    client: Client,
}

impl PriceFeedClient {
    /// Create a client from the `price_feed` config section
    pub fn from_config(config: &PriceFeedConfig) -> Result<Self> {
        Self::with_url(config.url.clone(), config.request_timeout())
    }

    /// Create a client for a custom feed URL
    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the feed and extract the USD rate
    pub async fn fetch_price(&self) -> Result<f64> {
        debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PriceFeedError::BadStatus(status.as_u16(), body));
        }

        let parsed: CurrentPriceResponse = response
            .json()
            .await
            .map_err(|e| PriceFeedError::DeserializeFailed(e.to_string()))?;

        Ok(parsed.usd_price())
    }
}

#[async_trait]
impl PriceSource for PriceFeedClient {
    async fn current_price(&self) -> anyhow::Result<f64> {
        Ok(self.fetch_price().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_url() {
        let client = PriceFeedClient::from_config(&PriceFeedConfig::default()).unwrap();
        assert_eq!(client.url(), PRICE_FEED_URL);

        let config = PriceFeedConfig {
            url: "http://localhost:9000/price.json".to_string(),
            ..PriceFeedConfig::default()
        };
        let client = PriceFeedClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://localhost:9000/price.json");
    }
}
