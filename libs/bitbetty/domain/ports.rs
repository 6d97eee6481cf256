//! Interfaces to the external services the game talks to
//!
//! Implemented by the HTTP clients in `infrastructure::client` and by
//! in-memory fakes in tests.

use anyhow::Result;
use async_trait::async_trait;

use super::guess::GuessRequest;

/// Source of the current BTC/USD price
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn current_price(&self) -> Result<f64>;
}

/// Remote scoring backend
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Record a guess for later resolution
    async fn submit_guess(&self, guess: &GuessRequest) -> Result<()>;

    /// Total score for a user
    async fn fetch_score(&self, username: &str) -> Result<i64>;
}
