use crate::error::CheckError;
use crate::models::{CheckResponse, ErrorResponse};
use crate::services::checker_service::run_check;
use crate::AppState;
use chrono::Utc;
use log::error;
use rocket::serde::json::Json;
use rocket::{get, State};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

#[get("/check")]
pub async fn check(state: &State<AppState>) -> Result<Json<CheckResponse>, ErrorResponse> {
    let now = Utc::now();
    match run_check(
        state.api_key.as_deref(),
        &state.api_base_url,
        state.channels,
        now,
    )
    .await
    {
        Ok(report) => Ok(Json(report.into())),
        Err(e @ CheckError::MissingApiKey) => {
            error!("Check aborted: {e}");
            Err(ErrorResponse::new(e.to_string()))
        }
        Err(e) => {
            error!("Unexpected error: {e}");
            Err(ErrorResponse::new(UNEXPECTED_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::CHANNELS;
    use crate::test_server::FakeYouTube;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use rocket::routes;
    use serde_json::Value;
    use url::Url;

    fn state(api_key: Option<&str>) -> AppState {
        AppState {
            api_key: api_key.map(String::from),
            api_base_url: Url::parse("http://127.0.0.1:9/youtube/v3/").unwrap(),
            channels: CHANNELS,
        }
    }

    async fn get_check(state: AppState) -> (Status, Value) {
        let rocket = rocket::build().manage(state).mount("/", routes![check]);
        let client = Client::tracked(rocket).await.unwrap();
        let response = client.get("/check").dispatch().await;
        let status = response.status();
        let body: Value = response.into_json().await.unwrap();
        (status, body)
    }

    #[rocket::async_test]
    async fn test_missing_key_is_a_top_level_error() {
        let (status, body) = get_check(state(None)).await;
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "YOUTUBE_API_KEY is not set in the .env file.");
        assert!(body.get("channels").is_none());
    }

    #[rocket::async_test]
    async fn test_blank_key_is_a_top_level_error() {
        let (status, body) = get_check(state(Some("   "))).await;
        assert_eq!(status, Status::InternalServerError);
        assert_eq!(body["error"], "YOUTUBE_API_KEY is not set in the .env file.");
    }

    #[rocket::async_test]
    async fn test_check_returns_report_envelope() {
        let server = FakeYouTube::start(vec![
            (200, r#"{"items":[{"id":{"videoId":"abc123"},"snippet":{"title":"Morning update","publishedAt":"2026-02-21T19:00:00Z"}}]}"#),
            (403, r#"{"error":{"code":403}}"#),
            (200, r#"{"items":[]}"#),
            (200, r#"{"kind":"youtube#searchListResponse"}"#),
            (200, r#"{"items":[]}"#),
        ]);
        let (status, body) = get_check(AppState {
            api_key: Some("k".to_string()),
            api_base_url: server.base_url.clone(),
            channels: CHANNELS,
        })
        .await;

        assert_eq!(status, Status::Ok);
        assert_eq!(body["ok"], true);
        assert!(body["checked_at"].as_str().unwrap().ends_with(" IST"));

        let channels = body["channels"].as_array().unwrap();
        assert_eq!(channels.len(), 5);
        for (result, channel) in channels.iter().zip(CHANNELS) {
            assert_eq!(result["id"], channel.id);
            assert_eq!(result["name"], channel.display_name);
        }

        assert_eq!(channels[0]["has_videos"], true);
        assert_eq!(channels[0]["error"], Value::Null);
        assert_eq!(
            channels[0]["videos"][0]["link"],
            "https://youtube.com/watch?v=abc123"
        );
        assert_eq!(
            channels[0]["videos"][0]["thumbnail"],
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
        assert_eq!(channels[1]["error"], "API quota exceeded or key invalid.");
        assert_eq!(channels[1]["has_videos"], false);
        for result in &channels[2..] {
            assert_eq!(result["has_videos"], false);
            assert_eq!(result["error"], Value::Null);
        }

        let requests = server.request_lines();
        assert_eq!(requests.len(), 5);
        for (request, channel) in requests.iter().zip(CHANNELS) {
            assert!(request.contains(&format!("channelId={}&", channel.id)), "{request}");
        }
    }
}
