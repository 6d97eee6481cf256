//! Integration tests for the terminal app's key handling

mod common;

use std::sync::Arc;

use crossterm::event::KeyCode;
use tokio::runtime::Handle;

use bitbetty::application::{App, InputMode};
use bitbetty::domain::RoundState;
use bitbetty::GameConfig;
use common::{settle, FakePrices, FakeScores};

fn app(prices: Arc<FakePrices>, scores: Arc<FakeScores>) -> App {
    App::with_services(Handle::current(), &GameConfig::default(), prices, scores)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[tokio::test(start_paused = true)]
async fn test_username_entry_then_guess() {
    let prices = Arc::new(FakePrices::constant(50000.12));
    let scores = Arc::new(FakeScores::new(0));
    let mut app = app(prices.clone(), scores.clone());
    settle().await;

    assert_eq!(app.input_mode, InputMode::Username);
    // Poller starts before the username is known
    assert_eq!(prices.calls(), 1);

    type_text(&mut app, "alicx");
    app.handle_key(KeyCode::Backspace);
    app.handle_key(KeyCode::Char('e'));
    assert_eq!(app.username_input, "alice");

    app.handle_key(KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Playing);
    assert_eq!(app.session.read().username(), Some("alice"));

    app.handle_key(KeyCode::Char('u'));
    assert_eq!(app.session.read().round_state(), RoundState::Pending);
    assert_eq!(app.status_message.as_deref(), Some("Guessed Up from $50000.12"));

    settle().await;
    assert_eq!(scores.submitted().len(), 1);
    assert_eq!(scores.submitted()[0].guess, "1");

    // Locked while pending
    app.handle_key(KeyCode::Down);
    assert_eq!(app.status_message.as_deref(), Some("A guess is already pending"));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.status_message.as_deref(), Some("Round still running"));

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn test_empty_username_is_rejected() {
    let mut app = app(Arc::new(FakePrices::constant(100.0)), Arc::new(FakeScores::new(0)));

    type_text(&mut app, "   ");
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Username);
    assert_eq!(app.status_message.as_deref(), Some("Username cannot be empty"));
    assert_eq!(app.session.read().username(), None);
}

#[tokio::test(start_paused = true)]
async fn test_guess_before_first_price() {
    let prices = Arc::new(FakePrices::scripted(Vec::new(), None));
    let scores = Arc::new(FakeScores::new(0));
    let mut app = app(prices, scores.clone());

    app.set_username("alice");
    settle().await;

    app.handle_key(KeyCode::Up);
    assert_eq!(app.session.read().round_state(), RoundState::Open);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Price not loaded yet, try again in a moment")
    );

    settle().await;
    assert!(scores.submitted().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_keys_on_username_screen_are_text() {
    let mut app = app(Arc::new(FakePrices::constant(100.0)), Arc::new(FakeScores::new(0)));

    // 'q' and 'u' are part of the name, not commands
    type_text(&mut app, "qu");
    assert!(!app.should_quit);
    assert_eq!(app.username_input, "qu");

    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_polling() {
    let prices = Arc::new(FakePrices::constant(100.0));
    let mut app = app(prices.clone(), Arc::new(FakeScores::new(0)));
    settle().await;
    assert_eq!(prices.calls(), 1);

    app.shutdown();
    tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    assert_eq!(prices.calls(), 1);
}
