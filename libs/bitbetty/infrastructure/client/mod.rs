//! HTTP clients for the price feed and the scoring backend

pub mod price_feed;
pub mod scoring;

pub use price_feed::{PriceFeedClient, PriceFeedError};
pub use scoring::{ScoringClient, ScoringError};
