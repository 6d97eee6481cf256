//! Guess lifecycle
//!
//! Open -> Pending when a guess is accepted, Pending -> Open once the score
//! fetched after the countdown differs from the one we had. The countdown is
//! its own task; it only lives while a round is pending.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::score::{ScoreRefresh, ScoreRefresher};
use crate::domain::{
    CountdownTick, Direction, Guess, RoundState, ScoreService, SessionError, SharedSession,
};
use crate::infrastructure::config::ResolutionConfig;
use crate::infrastructure::ShutdownManager;

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// What a manual result check ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualCheck {
    /// Round was waiting at zero, a resolution attempt was started
    Resolving,
    /// No round pending, the displayed score is being refreshed
    Refreshing,
    /// Countdown still running, nothing to do
    Ignored,
}

pub struct RoundController {
    session: SharedSession,
    scores: Arc<dyn ScoreService>,
    refresher: ScoreRefresher,
    resolution: ResolutionConfig,
    shutdown: ShutdownManager,
    runtime: Handle,
    countdown: Mutex<Option<JoinHandle<()>>>,
}

impl RoundController {
    pub fn new(
        session: SharedSession,
        scores: Arc<dyn ScoreService>,
        resolution: ResolutionConfig,
        shutdown: ShutdownManager,
        runtime: Handle,
    ) -> Arc<Self> {
        let refresher = ScoreRefresher::new(session.clone(), scores.clone());
        Arc::new(Self {
            session,
            scores,
            refresher,
            resolution,
            shutdown,
            runtime,
            countdown: Mutex::new(None),
        })
    }

    /// Set the username and load the user's current score
    pub fn register_user(self: &Arc<Self>, name: &str) -> Result<(), SessionError> {
        self.session.write().set_username(name)?;
        info!("[Round] Playing as {}", name.trim());

        let this = Arc::clone(self);
        self.runtime.spawn(async move {
            this.refresher.refresh().await;
        });
        Ok(())
    }

    /// Accept a guess, submit it and start the countdown
    ///
    /// The session goes Pending before the request is sent, so a second
    /// guess cannot slip in while the first is in flight. A failed
    /// submission is logged and the round stays Pending.
    pub fn submit_guess(self: &Arc<Self>, direction: Direction) -> Result<Guess, SessionError> {
        let accepted = self.session.write().begin_round(direction);
        let guess = match accepted {
            Ok(guess) => guess,
            Err(e) => {
                debug!("[Round] Guess {} rejected: {}", direction, e);
                return Err(e);
            }
        };

        info!(
            "[Round] {} guessed {} at ${}",
            guess.username, guess.direction, guess.baseline_price
        );

        let request = guess.to_request();
        let scores = Arc::clone(&self.scores);
        self.runtime.spawn(async move {
            if let Err(e) = scores.submit_guess(&request).await {
                error!("[Round] Error submitting guess: {:#}", e);
            }
        });

        self.start_countdown();
        Ok(guess)
    }

    /// Fetch the score and close the round if it moved
    pub async fn resolve(&self) -> bool {
        let ScoreRefresh { score, changed } = self.refresher.refresh().await;
        if !changed {
            return false;
        }

        self.session.write().resolve_round();
        info!("[Round] Round resolved, score is now {}", score);
        true
    }

    /// Latest score from the backend
    pub async fn refresh_score(&self) -> ScoreRefresh {
        self.refresher.refresh().await
    }

    /// User-triggered result check
    pub fn check_now(self: &Arc<Self>) -> ManualCheck {
        let (state, remaining) = {
            let session = self.session.read();
            (session.round_state(), session.time_remaining())
        };

        let this = Arc::clone(self);
        match state {
            RoundState::Open => {
                self.runtime.spawn(async move {
                    this.refresh_score().await;
                });
                ManualCheck::Refreshing
            }
            RoundState::Pending if remaining == 0 => {
                self.runtime.spawn(async move {
                    this.resolve().await;
                });
                ManualCheck::Resolving
            }
            RoundState::Pending => ManualCheck::Ignored,
        }
    }

    /// Abort the countdown task, if any
    pub fn shutdown(&self) {
        if let Some(handle) = self.countdown.lock().take() {
            handle.abort();
        }
    }

    fn start_countdown(self: &Arc<Self>) {
        let this = Arc::clone(self);
        let handle = self.runtime.spawn(async move { this.run_countdown().await });

        if let Some(previous) = self.countdown.lock().replace(handle) {
            previous.abort();
        }
    }

    async fn run_countdown(self: Arc<Self>) {
        let mut ticker = interval_at(Instant::now() + COUNTDOWN_STEP, COUNTDOWN_STEP);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !self.shutdown.is_running() {
                return;
            }

            let tick = self.session.write().tick();
            match tick {
                CountdownTick::Running(_) => continue,
                CountdownTick::Expired => break,
                // Closed by a manual check
                CountdownTick::Idle => return,
            }
        }

        info!("[Round] Countdown finished, checking result");
        if self.resolve().await {
            return;
        }

        if !self.resolution.retry_unchanged {
            warn!("[Round] Score has not updated yet; round left unresolved");
            return;
        }

        let retry_interval = self.resolution.retry_interval();
        while self.shutdown.is_running() {
            self.shutdown.interruptible_sleep(retry_interval).await;
            if !self.shutdown.is_running() || self.session.read().is_guess_resolved() {
                return;
            }
            debug!("[Round] Re-checking score");
            if self.resolve().await {
                return;
            }
        }
    }
}
