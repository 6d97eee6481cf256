//! Score refresh
//!
//! Fetches the user's score and tells the caller whether it moved. A failed
//! fetch counts as "not moved yet".

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{ScoreService, SharedSession};

/// Outcome of a score fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRefresh {
    /// Score known after the fetch
    pub score: i64,
    /// Whether the fetched score differs from the previous one
    pub changed: bool,
}

pub struct ScoreRefresher {
    session: SharedSession,
    scores: Arc<dyn ScoreService>,
}

impl ScoreRefresher {
    pub fn new(session: SharedSession, scores: Arc<dyn ScoreService>) -> Self {
        Self { session, scores }
    }

    /// Fetch the latest score for the session's user and store it
    pub async fn refresh(&self) -> ScoreRefresh {
        let username = self.session.read().username().map(str::to_string);
        let Some(username) = username else {
            return self.unchanged();
        };

        match self.scores.fetch_score(&username).await {
            Ok(fetched) => {
                let changed = self.session.write().apply_score(fetched);
                if changed {
                    debug!("[Scores] Score for {} is now {}", username, fetched);
                } else {
                    debug!("[Scores] Score for {} has not updated yet", username);
                }
                ScoreRefresh {
                    score: fetched,
                    changed,
                }
            }
            Err(e) => {
                warn!("[Scores] Error fetching score for {}: {:#}", username, e);
                self.unchanged()
            }
        }
    }

    fn unchanged(&self) -> ScoreRefresh {
        ScoreRefresh {
            score: self.session.read().score(),
            changed: false,
        }
    }
}
