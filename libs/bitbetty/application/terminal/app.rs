//! Terminal application state and input handling

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::KeyCode;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::info;

use crate::application::poller::PricePoller;
use crate::application::round::{ManualCheck, RoundController};
use crate::domain::{Direction, PriceSource, ScoreService, Session, SharedSession};
use crate::infrastructure::{GameConfig, PriceFeedClient, ScoringClient, ShutdownManager};

/// Which screen has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a username
    Username,
    /// Watching the chart and guessing
    Playing,
}

/// Main application state
pub struct App {
    /// Session shown by every widget
    pub session: SharedSession,
    /// Guess lifecycle
    controller: Arc<RoundController>,
    /// Price poll task
    poller: Option<JoinHandle<()>>,
    /// Shutdown flag for background tasks
    shutdown: ShutdownManager,
    /// Current screen
    pub input_mode: InputMode,
    /// Username being typed
    pub username_input: String,
    /// Status message to show in footer
    pub status_message: Option<String>,
    /// Whether to quit
    pub should_quit: bool,
}

impl App {
    /// Build the HTTP clients from config and start polling
    pub fn initialize(runtime: Handle, config: &GameConfig) -> Result<Self> {
        let feed = PriceFeedClient::from_config(&config.price_feed)?;
        let scores = ScoringClient::from_config(&config.scoring_api)?;

        info!("[App] Price feed: {}", feed.url());
        info!("[App] Scoring API: {}", scores.base_url());

        Ok(Self::with_services(
            runtime,
            config,
            Arc::new(feed),
            Arc::new(scores),
        ))
    }

    /// Start the game against the given services
    pub fn with_services(
        runtime: Handle,
        config: &GameConfig,
        prices: Arc<dyn PriceSource>,
        scores: Arc<dyn ScoreService>,
    ) -> Self {
        let shutdown = ShutdownManager::new();
        let session = Session::new(config.round.countdown_secs).shared();

        let poller = PricePoller::new(prices, session.clone(), config.price_feed.poll_interval())
            .spawn(&runtime, shutdown.clone());

        let controller = RoundController::new(
            session.clone(),
            scores,
            config.resolution.clone(),
            shutdown.clone(),
            runtime,
        );

        Self {
            session,
            controller,
            poller: Some(poller),
            shutdown,
            input_mode: InputMode::Username,
            username_input: String::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Dispatch a key press for the current screen
    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Username => match code {
                KeyCode::Enter => self.submit_username(),
                KeyCode::Backspace => {
                    self.username_input.pop();
                }
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if !c.is_control() => self.username_input.push(c),
                _ => {}
            },
            InputMode::Playing => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('u') | KeyCode::Up => self.guess(Direction::Up),
                KeyCode::Char('d') | KeyCode::Down => self.guess(Direction::Down),
                KeyCode::Char('r') => self.check_result(),
                _ => {}
            },
        }
    }

    /// Submit the typed username and switch to the game screen
    pub fn submit_username(&mut self) {
        let name = self.username_input.clone();
        self.set_username(&name);
    }

    /// Set the username directly (e.g. from the command line)
    pub fn set_username(&mut self, name: &str) {
        match self.controller.register_user(name) {
            Ok(()) => {
                self.input_mode = InputMode::Playing;
                self.status_message = None;
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Guess the next price move
    pub fn guess(&mut self, direction: Direction) {
        self.status_message = match self.controller.submit_guess(direction) {
            Ok(guess) => Some(format!(
                "Guessed {} from ${:.2}",
                guess.direction, guess.baseline_price
            )),
            Err(e) => Some(e.to_string()),
        };
    }

    /// Ask the backend for the result now
    pub fn check_result(&mut self) {
        self.status_message = match self.controller.check_now() {
            ManualCheck::Resolving => Some("Checking result...".to_string()),
            ManualCheck::Refreshing => Some("Refreshing score...".to_string()),
            ManualCheck::Ignored => Some("Round still running".to_string()),
        };
    }

    /// Stop background tasks
    pub fn shutdown(&mut self) {
        self.shutdown.trigger();
        self.controller.shutdown();
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
