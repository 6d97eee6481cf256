//! Price poller
//!
//! Fetches the BTC price right away and then on a fixed interval, appending
//! every successful reading to the session's series. Failures are logged and
//! the next tick proceeds as usual.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::{PriceSample, PriceSource, SharedSession};
use crate::infrastructure::ShutdownManager;

pub struct PricePoller {
    source: Arc<dyn PriceSource>,
    session: SharedSession,
    period: Duration,
}

impl PricePoller {
    pub fn new(source: Arc<dyn PriceSource>, session: SharedSession, period: Duration) -> Self {
        Self {
            source,
            session,
            period,
        }
    }

    /// Fetch once and record the sample; returns whether a sample was added
    pub async fn poll_once(&self) -> bool {
        match self.source.current_price().await {
            Ok(price) if price.is_finite() && price > 0.0 => {
                let sample = PriceSample::now(price);
                debug!("[Poller] BTC ${:.2} at {}", price, sample.timestamp_label);
                self.session.write().record_price(sample);
                true
            }
            Ok(price) => {
                warn!("[Poller] Ignoring invalid BTC price: {}", price);
                false
            }
            Err(e) => {
                warn!("[Poller] Error fetching BTC price: {:#}", e);
                false
            }
        }
    }

    /// Poll until shutdown
    pub async fn run(self, shutdown: ShutdownManager) {
        info!("[Poller] Polling BTC price every {:?}", self.period);

        // First tick completes immediately
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !shutdown.is_running() {
                break;
            }
            self.poll_once().await;
        }

        info!("[Poller] Stopped");
    }

    /// Run on the given runtime; abort the handle to stop early
    pub fn spawn(self, runtime: &Handle, shutdown: ShutdownManager) -> JoinHandle<()> {
        runtime.spawn(self.run(shutdown))
    }
}
