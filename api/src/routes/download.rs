use axum::{
    Router,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;

use crate::AppState;
use crate::models::DownloadRequest;
use crate::services::download::DownloadError;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/download", post(download))
}

/// Pulls `downloadUrl` out of the raw body. An empty body, malformed JSON, or
/// a missing/blank field all count as "no URL".
fn requested_url(body: &[u8]) -> Option<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice::<DownloadRequest>(body)
        .ok()?
        .download_url
        .filter(|url| !url.trim().is_empty())
}

/// POST /api/download - Fetch a finished clip and re-serve it as an attachment
async fn download(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(url) = requested_url(&body) else {
        return DownloadError::MissingUrl.into_response();
    };

    match state.download.fetch(&url).await {
        Ok(video) => video.into_response(),
        Err(e) => e.into_response(),
    }
}
