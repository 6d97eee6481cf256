//! CLI utilities for binaries
//!
//! Handles configuration path lookup and command line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

/// Usage line printed for `--help` and argument errors
pub const USAGE: &str = "usage: bitbetty [--username NAME] [--config PATH]";

/// Type of configuration to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigType {
    /// Game configuration (config/bitbetty.yaml)
    Game,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Game => "config/bitbetty.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    pub fn env_var_name(&self) -> &str {
        "BITBETTY_CONFIG_PATH"
    }
}

/// Load configuration path from environment or use default
///
/// A custom path always wins over the environment.
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    if let ConfigType::Custom(path) = &config_type {
        return path.into();
    }
    std::env::var(config_type.env_var_name())
        .unwrap_or_else(|_| config_type.default_path().to_string())
        .into()
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Skip the username screen
    pub username: Option<String>,
    /// Explicit config file
    pub config: Option<String>,
    /// `--help` was given
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--username" | "-u" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--username needs a value\n{}", USAGE))?;
                    parsed.username = Some(value);
                }
                "--config" | "-c" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--config needs a value\n{}", USAGE))?;
                    parsed.config = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                other => bail!("unknown argument '{}'\n{}", other, USAGE),
            }
        }

        Ok(parsed)
    }

    /// Config source: `--config` if given, else environment/default
    pub fn config_type(&self) -> ConfigType {
        match &self.config {
            Some(path) => ConfigType::Custom(path.clone()),
            None => ConfigType::Game,
        }
    }
}
