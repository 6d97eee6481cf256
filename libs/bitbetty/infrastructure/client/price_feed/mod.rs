//! Public BTC price feed
//!
//! # Example
//!
//! ```rust,ignore
//! use bitbetty::infrastructure::client::price_feed::PriceFeedClient;
//! use bitbetty::infrastructure::config::PriceFeedConfig;
//!
//! let feed = PriceFeedClient::from_config(&PriceFeedConfig::default())?;
//! let price = feed.fetch_price().await?;
//! ```

mod client;
mod types;

pub use client::{PriceFeedClient, PriceFeedError, Result, PRICE_FEED_URL};
pub use types::{Bpi, CurrencyRate, CurrentPriceResponse};
