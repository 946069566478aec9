#[macro_use]
extern crate rocket;

mod api;
mod channels;
mod config;
mod error;
mod models;
mod services;
#[cfg(test)]
mod test_server;
mod utils;

use models::Channel;
use rocket::{Build, Rocket};
use url::Url;

pub struct AppState {
    pub api_key: Option<String>,
    pub api_base_url: Url,
    pub channels: &'static [Channel],
}

fn build_rocket(state: AppState, cors: rocket_cors::Cors) -> Rocket<Build> {
    rocket::custom(config::rocket_figment())
        .manage(state)
        .mount("/", routes![api::index, api::check])
        .attach(cors)
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    config::load_environment();
    config::init_logger();

    let state = config::create_app_state()?;
    let cors = config::create_cors()?;

    build_rocket(state, cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed to launch: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;

    #[rocket::async_test]
    async fn test_routes_are_mounted() {
        let state = AppState {
            api_key: None,
            api_base_url: Url::parse("http://127.0.0.1:9/youtube/v3/").unwrap(),
            channels: channels::CHANNELS,
        };
        let cors = config::create_cors().unwrap();
        let client = Client::tracked(build_rocket(state, cors)).await.unwrap();

        assert_eq!(client.get("/").dispatch().await.status(), Status::Ok);

        let response = client.get("/check").dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert!(response
            .into_string()
            .await
            .unwrap()
            .contains("YOUTUBE_API_KEY is not set"));
    }
}
