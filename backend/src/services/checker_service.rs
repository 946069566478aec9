use crate::error::{CheckError, SearchError};
use crate::models::{Channel, ChannelResult, Report, VideoEntry};
use crate::services::youtube_service::{
    ApiKey, SearchItem, SearchQuery, VideoSearch, YouTubeClient, MAX_RESULTS,
};
use crate::utils::{
    format_api_timestamp, format_local_timestamp, local_midnight_utc, localize_timestamp,
};
use chrono::{DateTime, Utc};
use log::{error, info};
use url::Url;

fn fallback_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

fn watch_link(video_id: &str) -> String {
    format!("https://youtube.com/watch?v={video_id}")
}

pub fn map_search_item(item: SearchItem) -> Result<VideoEntry, SearchError> {
    let video_id = item.id.video_id;
    let published_time_local = localize_timestamp(&item.snippet.published_at).map_err(|e| {
        SearchError::Invalid(format!(
            "Invalid publish time '{}': {e}",
            item.snippet.published_at
        ))
    })?;

    let thumbnail_url = item
        .snippet
        .thumbnails
        .high
        .and_then(|t| t.url)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| fallback_thumbnail(&video_id));

    Ok(VideoEntry {
        title: item.snippet.title,
        link: watch_link(&video_id),
        thumbnail_url,
        published_time_local,
    })
}

async fn fetch_channel_videos(
    search: &dyn VideoSearch,
    channel: &Channel,
    published_after: &str,
) -> Result<Vec<VideoEntry>, SearchError> {
    let query = SearchQuery {
        channel_id: channel.id,
        max_results: MAX_RESULTS,
        published_after,
    };

    search
        .search_recent(&query)
        .await?
        .into_iter()
        .map(map_search_item)
        .collect()
}

/// Check one channel. Failures end up in the result's `error` field.
pub async fn check_channel(
    search: &dyn VideoSearch,
    channel: &Channel,
    published_after: &str,
) -> ChannelResult {
    match fetch_channel_videos(search, channel, published_after).await {
        Ok(videos) => {
            info!("{}: {} video(s)", channel.display_name, videos.len());
            ChannelResult::with_videos(channel, videos)
        }
        Err(e) => {
            let message = e.channel_message();
            error!("{}: {} ({e})", channel.display_name, message);
            ChannelResult::failed(channel, message)
        }
    }
}

/// Check every channel in order for uploads since local midnight of `now`.
pub async fn check_all_channels(
    search: &dyn VideoSearch,
    channels: &[Channel],
    now: DateTime<Utc>,
) -> Report {
    let published_after = format_api_timestamp(local_midnight_utc(now));
    info!(
        "Checking {} channels for uploads after {published_after}",
        channels.len()
    );

    let mut results = Vec::with_capacity(channels.len());
    for channel in channels {
        results.push(check_channel(search, channel, &published_after).await);
    }

    Report {
        checked_at: format_local_timestamp(now),
        channels: results,
    }
}

/// Entry point for one dashboard refresh. A missing key fails before any
/// channel is queried.
pub async fn run_check(
    api_key: Option<&str>,
    api_base_url: &Url,
    channels: &[Channel],
    now: DateTime<Utc>,
) -> Result<Report, CheckError> {
    let api_key = ApiKey::new(api_key)?;
    let client = YouTubeClient::new(api_key, api_base_url)?;
    Ok(check_all_channels(&client, channels, now).await)
}
