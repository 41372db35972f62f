use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use std::sync::Arc;

use crate::AppState;
use crate::models::ClipRequest;
use crate::services::error::{ApiError, LogErr};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/clip", post(clip))
}

/// POST /api/clip - Forward a clip request and return the clipping server's JSON as-is
async fn clip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClipRequest>,
) -> Result<Json<Value>, ApiError> {
    let payload = state.clip.clip(&request).await.log_status(
        "[api/clip] relay failed",
        StatusCode::BAD_GATEWAY,
        "Failed to reach clipping server",
    )?;

    Ok(Json(payload))
}
