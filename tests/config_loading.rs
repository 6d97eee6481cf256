//! Integration test: Configuration utilities
//!
//! Tests the bin_common configuration loading functionality.

use bitbetty_terminal::bin_common::{load_config_from_env, CliArgs, ConfigType};
use std::env;

#[test]
fn test_game_config_default() {
    // Clear env var to test default
    env::remove_var("BITBETTY_CONFIG_PATH");

    let config_path = load_config_from_env(ConfigType::Game);
    assert_eq!(config_path.to_str().unwrap(), "config/bitbetty.yaml");
}

#[test]
fn test_custom_config() {
    let custom = ConfigType::Custom("custom/path.yaml".to_string());
    let config_path = load_config_from_env(custom);

    assert_eq!(config_path.to_str().unwrap(), "custom/path.yaml");
}

#[test]
fn test_config_flag_wins() {
    let args = CliArgs::parse(vec!["--config".to_string(), "other.yaml".to_string()]).unwrap();
    let config_path = load_config_from_env(args.config_type());

    assert_eq!(config_path.to_str().unwrap(), "other.yaml");
}

#[test]
fn test_config_type_env_var_names() {
    assert_eq!(ConfigType::Game.env_var_name(), "BITBETTY_CONFIG_PATH");
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/bitbetty.yaml");
    let config = bitbetty_terminal::bitbetty::GameConfig::load(path).unwrap();

    assert_eq!(config.round.countdown_secs, 60);
    assert_eq!(config.price_feed.poll_interval_secs, 5);
    assert!(!config.resolution.retry_unchanged);
}
