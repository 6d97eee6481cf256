//! Infrastructure Layer
//!
//! Contains implementations of external interfaces (HTTP clients, config,
//! logging). Depends on the domain layer but not on the application layer.

pub mod client;
pub mod config;
pub mod logging;
pub mod shutdown;

pub use client::{PriceFeedClient, PriceFeedError, ScoringClient, ScoringError};
pub use config::{ConfigError, GameConfig};
pub use logging::init_tracing;
pub use shutdown::ShutdownManager;
