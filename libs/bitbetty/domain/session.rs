//! Session state for a single game
//!
//! Holds everything the UI shows: username, score, latest price, the price
//! series for the chart and the state of the current round. No I/O happens
//! here; the poller and the round controller write into it through
//! [`SharedSession`].

use std::sync::Arc;

use chrono::Local;
use parking_lot::RwLock;
use thiserror::Error;

use super::guess::{Direction, Guess};

/// Default round length in seconds
pub const DEFAULT_ROUND_SECS: u32 = 60;

/// Session shared between the UI thread and background tasks
pub type SharedSession = Arc<RwLock<Session>>;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username already set to '{0}'")]
    UsernameAlreadySet(String),

    #[error("Enter a username before guessing")]
    NoUsername,

    #[error("A guess is already pending")]
    RoundPending,

    #[error("Price not loaded yet, try again in a moment")]
    PriceUnknown,
}

pub type Result<T> = std::result::Result<T, SessionError>;

// =============================================================================
// Price series
// =============================================================================

/// A single polled price with its wall-clock label
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    pub price: f64,
    pub timestamp_label: String,
}

impl PriceSample {
    pub fn new(price: f64, timestamp_label: impl Into<String>) -> Self {
        Self {
            price,
            timestamp_label: timestamp_label.into(),
        }
    }

    /// Sample labelled with the current local time (HH:MM:SS)
    pub fn now(price: f64) -> Self {
        Self::new(price, Local::now().format("%H:%M:%S").to_string())
    }
}

/// Append-only price history
///
/// Prices and labels are parallel vectors and always have the same length.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    prices: Vec<f64>,
    labels: Vec<String>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: PriceSample) {
        self.prices.push(sample.price);
        self.labels.push(sample.timestamp_label);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Points for a line chart, x = sample index
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.prices
            .iter()
            .enumerate()
            .map(|(i, &price)| (i as f64, price))
            .collect()
    }

    /// Min and max price, if any samples exist
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let first = *self.prices.first()?;
        Some(
            self.prices
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

// =============================================================================
// Round state
// =============================================================================

/// Whether the session is accepting a new guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No guess outstanding
    Open,
    /// Guess submitted, countdown running or waiting for resolution
    Pending,
}

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// No round in progress
    Idle,
    /// Seconds left after this tick
    Running(u32),
    /// Countdown is at zero, round needs resolving
    Expired,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Clone)]
pub struct Session {
    username: Option<String>,
    score: i64,
    current_price: Option<f64>,
    is_guess_resolved: bool,
    time_remaining: u32,
    round_secs: u32,
    series: PriceSeries,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_SECS)
    }
}

impl Session {
    pub fn new(round_secs: u32) -> Self {
        Self {
            username: None,
            score: 0,
            current_price: None,
            is_guess_resolved: true,
            time_remaining: round_secs,
            round_secs,
            series: PriceSeries::new(),
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    // ==================== Username ====================

    /// Set the username; only allowed once per session
    pub fn set_username(&mut self, name: &str) -> Result<()> {
        if let Some(existing) = &self.username {
            return Err(SessionError::UsernameAlreadySet(existing.clone()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        self.username = Some(name.to_string());
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    // ==================== Prices ====================

    /// Append a sample and make it the current price
    pub fn record_price(&mut self, sample: PriceSample) {
        self.current_price = Some(sample.price);
        self.series.push(sample);
    }

    pub fn current_price(&self) -> Option<f64> {
        self.current_price
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    // ==================== Score ====================

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Store a freshly fetched score, returns true if it differs from the known one
    pub fn apply_score(&mut self, fetched: i64) -> bool {
        if fetched == self.score {
            return false;
        }
        self.score = fetched;
        true
    }

    // ==================== Round ====================

    pub fn round_state(&self) -> RoundState {
        if self.is_guess_resolved {
            RoundState::Open
        } else {
            RoundState::Pending
        }
    }

    pub fn is_guess_resolved(&self) -> bool {
        self.is_guess_resolved
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn round_secs(&self) -> u32 {
        self.round_secs
    }

    /// Open a round for `direction` at the current price
    ///
    /// On success the session is Pending with a full countdown and the guess
    /// to submit is returned. Rejections leave the session untouched.
    pub fn begin_round(&mut self, direction: Direction) -> Result<Guess> {
        let username = self.username.clone().ok_or(SessionError::NoUsername)?;
        if !self.is_guess_resolved {
            return Err(SessionError::RoundPending);
        }
        let baseline = self.current_price.ok_or(SessionError::PriceUnknown)?;

        self.is_guess_resolved = false;
        self.time_remaining = self.round_secs;
        Ok(Guess::new(username, direction, baseline))
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> CountdownTick {
        if self.is_guess_resolved {
            return CountdownTick::Idle;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.time_remaining)
        }
    }

    /// Close the current round
    pub fn resolve_round(&mut self) {
        self.is_guess_resolved = true;
    }
}
