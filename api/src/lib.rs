pub mod client;
pub mod config;
pub mod constants;
pub mod models;
pub mod routes;
pub mod save;
pub mod services;
pub mod ui;
pub mod validation;

use axum::{Router, extract::DefaultBodyLimit};
use reqwest::Client;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::constants::MAX_REQUEST_BODY_SIZE;
use crate::services::clip::ClipRelay;
use crate::services::download::DownloadRelay;
use crate::services::relay::RelayBackend;

pub struct AppState {
    pub config: Config,
    pub clip: ClipRelay,
    pub download: DownloadRelay,
}

impl AppState {
    /// Both relays share one connection pool. No timeout: clipping runs until
    /// the clipping server answers.
    pub fn new(config: Config) -> Self {
        let http = Client::new();
        Self {
            clip: ClipRelay::new(&config.clip_server_url, http.clone()),
            download: DownloadRelay::new(http),
            config,
        }
    }

    pub fn relay_backend(&self) -> RelayBackend {
        RelayBackend::new(self.clip.clone(), self.download.clone())
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    routes::build_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE)),
        )
        .with_state(state)
}
