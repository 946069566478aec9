use crate::error::{CheckError, SearchError};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use url::Url;

pub const MAX_RESULTS: u32 = 5;

/// A non-blank YouTube Data API key.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: Option<&str>) -> Result<Self, CheckError> {
        match raw.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(ApiKey(key.to_string())),
            _ => Err(CheckError::MissingApiKey),
        }
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchQuery<'a> {
    pub channel_id: &'a str,
    pub max_results: u32,
    /// ISO8601 UTC, e.g. `2026-02-21T18:30:00Z`
    pub published_after: &'a str,
}

// https://developers.google.com/youtube/v3/docs/search/list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSnippet {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

pub fn parse_search_response(body: &str) -> Result<SearchListResponse, SearchError> {
    serde_json::from_str(body)
        .map_err(|e| SearchError::Invalid(format!("Invalid search response: {e}")))
}

/// Newest-first video search for a single channel.
#[rocket::async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search_recent(&self, query: &SearchQuery<'_>) -> Result<Vec<SearchItem>, SearchError>;
}

pub struct YouTubeClient {
    client: Client,
    search_url: Url,
    api_key: ApiKey,
}

impl YouTubeClient {
    pub fn new(api_key: ApiKey, base_url: &Url) -> Result<Self, CheckError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(YouTubeClient {
            client,
            search_url: base_url.join("search")?,
            api_key,
        })
    }
}

#[rocket::async_trait]
impl VideoSearch for YouTubeClient {
    async fn search_recent(&self, query: &SearchQuery<'_>) -> Result<Vec<SearchItem>, SearchError> {
        debug!(
            "Searching channel {} for videos after {}",
            query.channel_id, query.published_after
        );

        let max_results = query.max_results.to_string();
        // The request URL carries the key, so it is stripped from transport errors.
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("part", "snippet"),
                ("channelId", query.channel_id),
                ("maxResults", max_results.as_str()),
                ("order", "date"),
                ("type", "video"),
                ("publishedAfter", query.published_after),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.without_url()))?;

        Ok(parse_search_response(&body)?.items)
    }
}
