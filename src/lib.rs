//! BitBetty Terminal - Main Library
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (CLI)
//! - **bitbetty**: Game logic and terminal UI (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,ignore
//! use bitbetty_terminal::bin_common::{load_config_from_env, CliArgs};
//! use bitbetty_terminal::bitbetty::App;
//! ```

// Re-export workspace library for convenience
pub use bitbetty;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, CliArgs, ConfigType, USAGE};
}
