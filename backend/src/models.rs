use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::io::Cursor;

pub const DEFAULT_ACCENT_COLOR: &str = "#6b7280";

/// An entry of the fixed channel registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub id: &'static str,
    pub display_name: &'static str,
    pub accent_color: Option<&'static str>,
}

impl Channel {
    pub fn color(&self) -> &'static str {
        self.accent_color.unwrap_or(DEFAULT_ACCENT_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub title: String,
    pub link: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "time")]
    pub published_time_local: String,
}

/// Outcome for one channel. Either `videos` or `error` is populated, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelResult {
    pub id: String,
    pub name: String,
    pub color: String,
    pub videos: Vec<VideoEntry>,
    pub has_videos: bool,
    pub error: Option<String>,
}

impl ChannelResult {
    pub fn with_videos(channel: &Channel, videos: Vec<VideoEntry>) -> Self {
        ChannelResult {
            id: channel.id.to_string(),
            name: channel.display_name.to_string(),
            color: channel.color().to_string(),
            has_videos: !videos.is_empty(),
            videos,
            error: None,
        }
    }

    pub fn failed(channel: &Channel, error: String) -> Self {
        ChannelResult {
            error: Some(error),
            ..Self::with_videos(channel, Vec::new())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub checked_at: String,
    pub channels: Vec<ChannelResult>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub report: Report,
}

impl From<Report> for CheckResponse {
    fn from(report: Report) -> Self {
        CheckResponse { ok: true, report }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            ok: false,
            error: error.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(Status::InternalServerError)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
