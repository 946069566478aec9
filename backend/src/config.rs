use crate::channels::CHANNELS;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::figment::Figment;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const DEFAULT_PORT: u16 = 5000;

lazy_static! {
    pub static ref YOUTUBE_API_BASE_URL: String =
        env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    pub static ref PORT: u16 = parse_port(env::var("PORT").ok().as_deref());
    pub static ref CORS_ALLOWED_ORIGINS: Vec<String> = parse_origins(
        &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:8080".to_string())
    );
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting upload tracker backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

/// Parses the API base URL, adding the trailing slash `Url::join` relies on.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).with_context(|| format!("Invalid YOUTUBE_API_BASE_URL: {raw}"))
}

pub fn create_app_state() -> Result<AppState> {
    let api_base_url = parse_base_url(&YOUTUBE_API_BASE_URL)?;
    info!("Using YouTube API at: {api_base_url}");

    let api_key = env::var("YOUTUBE_API_KEY").ok();
    if api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
        warn!("YOUTUBE_API_KEY is not set; every check will fail until it is.");
    }

    Ok(AppState {
        api_key,
        api_base_url,
        channels: CHANNELS,
    })
}

pub fn rocket_figment() -> Figment {
    info!("Dashboard listening on port {}", *PORT);
    rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", *PORT))
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&CORS_ALLOWED_ORIGINS[..]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
