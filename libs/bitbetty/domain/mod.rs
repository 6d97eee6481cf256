//! Domain Layer
//!
//! Game entities and the interfaces the application layer needs from the
//! outside world. Depends on nothing else in the crate.

pub mod guess;
pub mod ports;
pub mod session;

pub use guess::{Direction, Guess, GuessRequest};
pub use ports::{PriceSource, ScoreService};
pub use session::{
    CountdownTick, PriceSample, PriceSeries, RoundState, Session, SessionError, SharedSession,
    DEFAULT_ROUND_SECS,
};
