use thiserror::Error;

/// Failures that abort a whole check before any channel is queried.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("YOUTUBE_API_KEY is not set in the .env file.")]
    MissingApiKey,

    #[error("Failed to build YouTube API client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid YouTube API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Failure while searching or mapping a single channel. Never aborts a report.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("YouTube API responded with status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Invalid(String),
}

impl SearchError {
    /// Message stored in the channel's `error` field.
    pub fn channel_message(&self) -> String {
        match self {
            SearchError::Status(401 | 403) => "API quota exceeded or key invalid.".to_string(),
            SearchError::Status(404) => "Channel not found.".to_string(),
            SearchError::Status(code) => format!("YouTube API error {code}."),
            other => other.to_string(),
        }
    }
}
