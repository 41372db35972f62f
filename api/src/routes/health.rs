use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(rename = "clipServer")]
    clip_server: String,
    timestamp: String,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        clip_server: state.clip.endpoint().to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
