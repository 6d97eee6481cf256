//! Terminal UI for the game
//!
//! Username screen first, then the live chart with score, price and guess
//! controls.

pub mod app;
pub mod ui;

pub use app::{App, InputMode};
