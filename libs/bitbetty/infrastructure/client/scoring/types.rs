//! Scoring API response types

use serde::{Deserialize, Serialize};

/// Body of `GET /scores/{username}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: i64,
}

/// Body of a successful `POST /guesses`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuessAccepted {
    /// Id the backend assigned to the guess
    #[serde(default)]
    pub guess: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GuessAccepted {
    /// Parse a success body; anything unreadable counts as an empty acknowledgement
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Error body returned on 4xx/5xx
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
