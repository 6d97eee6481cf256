//! Guess entities
//!
//! A guess is a directional call on the BTC price, pinned to the price seen
//! when it was made. It only lives long enough to be sent to the scoring API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a price guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Value the scoring API expects in the `guess` field
    pub fn wire_value(&self) -> &'static str {
        match self {
            Direction::Up => "1",
            Direction::Down => "-1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A guess made against a baseline price
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub username: String,
    pub direction: Direction,
    pub baseline_price: f64,
    pub submitted_at: DateTime<Utc>,
}

impl Guess {
    pub fn new(username: impl Into<String>, direction: Direction, baseline_price: f64) -> Self {
        Self {
            username: username.into(),
            direction,
            baseline_price,
            submitted_at: Utc::now(),
        }
    }

    /// Build the request body for `POST /guesses`
    pub fn to_request(&self) -> GuessRequest {
        GuessRequest {
            username: self.username.clone(),
            guess: self.direction.wire_value().to_string(),
            baseline_price: self.baseline_price.to_string(),
            guessed_at: self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of `POST /guesses`
///
/// The backend stores `baseline_price` as a decimal, so it travels as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub username: String,
    pub guess: String,
    pub baseline_price: String,
    pub guessed_at: String,
}
