//! BitBetty scoring backend
//!
//! # Example
//!
//! ```rust,ignore
//! use bitbetty::infrastructure::client::scoring::ScoringClient;
//! use bitbetty::infrastructure::config::ScoringApiConfig;
//!
//! let scores = ScoringClient::from_config(&ScoringApiConfig::default())?;
//! let score = scores.get_score("alice").await?;
//! ```

mod client;
mod types;

pub use client::{ScoringClient, ScoringError, Result, SCORING_API_BASE_URL};
pub use types::{ErrorResponse, GuessAccepted, ScoreResponse};
