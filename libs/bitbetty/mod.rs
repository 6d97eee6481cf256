//! BitBetty
//!
//! Bitcoin price guessing game for the terminal: poll the BTC price, guess
//! up or down, wait out the round and watch the score.
//!
//! ## Architecture
//!
//! - **domain**: session state, guesses and the service interfaces
//! - **infrastructure**: HTTP clients, config, logging, shutdown
//! - **application**: price poller, round controller, terminal UI

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used items
pub use application::{App, PricePoller, RoundController, ScoreRefresher};
pub use domain::{Direction, Guess, GuessRequest, PriceSample, RoundState, Session, SharedSession};
pub use infrastructure::{init_tracing, GameConfig, PriceFeedClient, ScoringClient, ShutdownManager};
