//! Application Layer
//!
//! Price polling, the guess lifecycle and the terminal UI.
//! This layer depends on domain and infrastructure layers.

pub mod poller;
pub mod round;
pub mod score;
pub mod terminal;

pub use poller::PricePoller;
pub use round::{ManualCheck, RoundController};
pub use score::{ScoreRefresh, ScoreRefresher};
pub use terminal::{App, InputMode};
