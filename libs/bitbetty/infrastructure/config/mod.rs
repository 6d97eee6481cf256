use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::domain::DEFAULT_ROUND_SECS;
use crate::infrastructure::client::price_feed::PRICE_FEED_URL;
use crate::infrastructure::client::scoring::SCORING_API_BASE_URL;

/// Environment variable overriding `scoring_api.base_url`
pub const API_URL_ENV: &str = "BITBETTY_API_URL";

/// Environment variable overriding `price_feed.url`
pub const FEED_URL_ENV: &str = "BITBETTY_FEED_URL";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Game client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub scoring_api: ScoringApiConfig,
    #[serde(default)]
    pub price_feed: PriceFeedConfig,
    #[serde(default)]
    pub round: RoundConfig,
    #[serde(default)]
    pub resolution: ResolutionConfig,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File the logs go to; the terminal is taken by the UI
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringApiConfig {
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ScoringApiConfig {
    fn default() -> Self {
        Self {
            base_url: SCORING_API_BASE_URL.to_string(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ScoringApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceFeedConfig {
    pub url: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PriceFeedConfig {
    fn default() -> Self {
        Self {
            url: PRICE_FEED_URL.to_string(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl PriceFeedConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown_secs: default_countdown_secs(),
        }
    }
}

/// What happens when the score has not moved once the countdown ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Keep re-checking the score until it changes
    ///
    /// Off by default: the round is left pending after a single check.
    #[serde(default)]
    pub retry_unchanged: bool,
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            retry_unchanged: false,
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

impl ResolutionConfig {
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "bitbetty.log".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_countdown_secs() -> u32 {
    DEFAULT_ROUND_SECS
}

fn default_retry_interval_secs() -> u64 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring_api: ScoringApiConfig::default(),
            price_feed: PriceFeedConfig::default(),
            round: RoundConfig::default(),
            resolution: ResolutionConfig::default(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: GameConfig = serde_yaml::from_str(&yaml_content)?;
        config.finish()
    }

    /// Load from a YAML file, falling back to defaults when it does not exist
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!("Config file {} not found, using defaults", path.display());
            Self::default().finish()
        }
    }

    /// Apply environment overrides and validate
    fn finish(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            info!("Overriding scoring API URL from environment variable");
            self.scoring_api.base_url = url;
        }
        if let Ok(url) = std::env::var(FEED_URL_ENV) {
            info!("Overriding price feed URL from environment variable");
            self.price_feed.url = url;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scoring_api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "scoring_api.base_url must not be empty".to_string(),
            ));
        }

        if self.price_feed.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "price_feed.url must not be empty".to_string(),
            ));
        }

        if self.price_feed.poll_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "price_feed.poll_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.scoring_api.request_timeout_secs == 0 || self.price_feed.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.round.countdown_secs == 0 {
            return Err(ConfigError::ValidationError(
                "round.countdown_secs must be greater than 0".to_string(),
            ));
        }

        if self.resolution.retry_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "resolution.retry_interval_secs must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }
}
