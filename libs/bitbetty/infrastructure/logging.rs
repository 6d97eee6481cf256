//! Logging initialization

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize tracing, writing to `log_file`
///
/// `RUST_LOG` takes precedence over `level` when set. Logs go to a file
/// because the terminal UI owns stdout.
pub fn init_tracing(level: &str, log_file: impl AsRef<Path>) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bitbetty={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .init();

    Ok(())
}
