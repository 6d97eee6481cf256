//! Shutdown flag shared by background tasks

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Shared running flag: `true` while the game runs, `false` once teardown starts
#[derive(Clone)]
pub struct ShutdownManager {
    flag: Arc<AtomicBool>,
}

impl ShutdownManager {
    /// Create a new shutdown manager with running state
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Request shutdown
    pub fn trigger(&self) {
        if self.flag.swap(false, Ordering::AcqRel) {
            info!("Shutting down...");
        }
    }

    /// Check if the process should continue running
    pub fn is_running(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Sleep for a duration, but wake early if shutdown is triggered
    pub async fn interruptible_sleep(&self, duration: Duration) {
        let check_interval = Duration::from_millis(50);
        let mut elapsed = Duration::ZERO;

        while elapsed < duration && self.is_running() {
            let step = check_interval.min(duration - elapsed);
            sleep(step).await;
            elapsed += step;
        }
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_clears_flag() {
        let shutdown = ShutdownManager::new();
        let task_copy = shutdown.clone();
        assert!(shutdown.is_running());

        shutdown.trigger();
        assert!(!shutdown.is_running());
        assert!(!task_copy.is_running());

        // Idempotent
        shutdown.trigger();
        assert!(!shutdown.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interruptible_sleep_returns_early() {
        let shutdown = ShutdownManager::new();
        let trigger = shutdown.clone();

        tokio::spawn(async move {
            sleep(Duration::from_millis(120)).await;
            trigger.trigger();
        });

        let started = tokio::time::Instant::now();
        shutdown.interruptible_sleep(Duration::from_secs(60)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
