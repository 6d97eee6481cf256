//! HTTP client for the BitBetty scoring backend

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::types::{ErrorResponse, GuessAccepted, ScoreResponse};
use crate::domain::{GuessRequest, ScoreService};
use crate::infrastructure::config::ScoringApiConfig;

/// Default scoring API base URL
pub const SCORING_API_BASE_URL: &str =
    "https://kk3yl6au72.execute-api.eu-central-1.amazonaws.com/prod";

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),

    #[error("HTTP error ({0}): {1}")]
    HttpError(u16, String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ScoringError {
    /// Map a non-success status and its body to an error
    ///
    /// The backend reports validation problems as `{"message": "..."}`.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body);

        match status.as_u16() {
            400 => ScoringError::BadRequest(message),
            404 => ScoringError::NotFound(message),
            code @ 500..=599 => ScoringError::ServerError(code, message),
            code => ScoringError::HttpError(code, message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;

/// Client for `POST /guesses` and `GET /scores/{username}`
pub struct ScoringClient {
    base_url: String,
    client: Client,
}

impl ScoringClient {
    /// Create a client from the `scoring_api` config section
    pub fn from_config(config: &ScoringApiConfig) -> Result<Self> {
        Self::with_base_url(config.base_url.clone(), config.request_timeout())
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with extra path segments appended (each one percent-encoded)
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ScoringError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ScoringError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// POST /guesses
    pub async fn post_guess(&self, guess: &GuessRequest) -> Result<GuessAccepted> {
        let url = self.endpoint(&["guesses"])?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(guess).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoringError::from_status(status, body));
        }

        info!("[Scores] Guess submitted for {} ({})", guess.username, status);

        let body = response.text().await.unwrap_or_default();
        Ok(GuessAccepted::from_body(&body))
    }

    /// GET /scores/{username}
    pub async fn get_score(&self, username: &str) -> Result<i64> {
        let url = self.endpoint(&["scores", username])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("[Scores] Score request for {} failed with {}", username, status);
            return Err(ScoringError::from_status(status, body));
        }

        let parsed: ScoreResponse = response
            .json()
            .await
            .map_err(|e| ScoringError::DeserializeFailed(e.to_string()))?;

        Ok(parsed.score)
    }
}

#[async_trait]
impl ScoreService for ScoringClient {
    async fn submit_guess(&self, guess: &GuessRequest) -> anyhow::Result<()> {
        let accepted = self.post_guess(guess).await?;
        debug!(
            "[Scores] Backend stored guess {} ({})",
            accepted.guess.as_deref().unwrap_or("<no id>"),
            accepted.message.as_deref().unwrap_or("no message")
        );
        Ok(())
    }

    async fn fetch_score(&self, username: &str) -> anyhow::Result<i64> {
        Ok(self.get_score(username).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ScoringClient {
        ScoringClient::with_base_url(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let c = ScoringClient::from_config(&ScoringApiConfig::default()).unwrap();
        assert_eq!(c.base_url(), SCORING_API_BASE_URL);

        let config = ScoringApiConfig {
            base_url: "http://localhost:8080/dev".to_string(),
            ..ScoringApiConfig::default()
        };
        let c = ScoringClient::from_config(&config).unwrap();
        assert_eq!(
            c.endpoint(&["guesses"]).unwrap().as_str(),
            "http://localhost:8080/dev/guesses"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let c = client("https://api.example.com/prod");
        assert_eq!(
            c.endpoint(&["guesses"]).unwrap().as_str(),
            "https://api.example.com/prod/guesses"
        );

        let c = client("https://api.example.com/prod/");
        assert_eq!(
            c.endpoint(&["scores", "alice"]).unwrap().as_str(),
            "https://api.example.com/prod/scores/alice"
        );
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let c = client("https://api.example.com/prod");
        assert_eq!(
            c.endpoint(&["scores", "a b/c"]).unwrap().as_str(),
            "https://api.example.com/prod/scores/a%20b%2Fc"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        let c = client("not a url");
        assert!(matches!(c.endpoint(&["guesses"]), Err(ScoringError::InvalidUrl(_))));
    }

    #[test]
    fn test_error_mapping_uses_message() {
        let err = ScoringError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": "User already has an unresolved guess"}"#.to_string(),
        );
        match err {
            ScoringError::BadRequest(msg) => assert_eq!(msg, "User already has an unresolved guess"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_mapping_status_classes() {
        assert!(matches!(
            ScoringError::from_status(StatusCode::NOT_FOUND, String::new()),
            ScoringError::NotFound(_)
        ));
        assert!(matches!(
            ScoringError::from_status(StatusCode::BAD_GATEWAY, "oops".to_string()),
            ScoringError::ServerError(502, ref body) if body == "oops"
        ));
        assert!(matches!(
            ScoringError::from_status(StatusCode::FORBIDDEN, String::new()),
            ScoringError::HttpError(403, _)
        ));
    }
}
