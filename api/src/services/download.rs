//! Download relay: fetch a finished clip and re-serve it as an attachment.
//!
//! The whole body is buffered before anything is sent back, so the usable
//! file size is bounded by memory and the client sees no bytes until the
//! upstream transfer has finished. There is no range support.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::Client;
use tracing::{error, info, warn};

use crate::constants::{DEFAULT_VIDEO_CONTENT_TYPE, DOWNLOAD_FILENAME};
use crate::services::error::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download URL is required")]
    MissingUrl,
    #[error("video host answered {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("transfer failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DownloadError {
    /// Fixed status and message reported to the caller. Upstream status codes
    /// are deliberately not passed through.
    pub fn api_error(&self) -> ApiError {
        match self {
            DownloadError::MissingUrl => {
                ApiError::new(StatusCode::BAD_REQUEST, "Download URL is required")
            }
            DownloadError::UpstreamStatus(_) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch video")
            }
            DownloadError::Transport(_) => ApiError::internal(),
        }
    }
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> Response {
        match &self {
            DownloadError::MissingUrl => warn!("download requested without a URL"),
            DownloadError::UpstreamStatus(status) => {
                warn!(%status, "video host rejected the download")
            }
            DownloadError::Transport(e) => error!(error = %e, "download error"),
        }
        self.api_error().into_response()
    }
}

/// A fully buffered video ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedVideo {
    pub bytes: Bytes,
    pub content_type: String,
}

impl DownloadedVideo {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl IntoResponse for DownloadedVideo {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME);
        let length = self.bytes.len().to_string();

        let built = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, self.content_type.as_str())
            .header(header::CONTENT_DISPOSITION, disposition)
            .header(header::CONTENT_LENGTH, length)
            .header(header::CACHE_CONTROL, "no-cache")
            .body(Body::from(self.bytes));

        match built {
            Ok(resp) => resp,
            Err(e) => {
                // Only reachable with an upstream content type that is not a valid header value.
                error!(error = %e, "failed to build download response");
                ApiError::internal().into_response()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct DownloadRelay {
    http: Client,
}

impl DownloadRelay {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// GET `url` and buffer the body.
    pub async fn fetch(&self, url: &str) -> Result<DownloadedVideo, DownloadError> {
        if url.trim().is_empty() {
            return Err(DownloadError::MissingUrl);
        }

        info!(%url, "fetching clip");
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DownloadError::UpstreamStatus(status));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VIDEO_CONTENT_TYPE)
            .to_string();

        let bytes = resp.bytes().await?;
        info!(bytes = bytes.len(), %content_type, "clip buffered");

        Ok(DownloadedVideo {
            bytes,
            content_type,
        })
    }
}
