//! HTTP client for a running ClipX server, used by the `clipx` CLI.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::constants::DEFAULT_VIDEO_CONTENT_TYPE;
use crate::models::{ClipRequest, DownloadRequest, error_message};
use crate::services::download::DownloadedVideo;
use crate::ui::{BackendError, ClipBackend};

/// Errors that can occur while talking to the ClipX server.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("response was not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for BackendError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::UnexpectedStatus { body, .. } => {
                let message = serde_json::from_str::<Value>(&body)
                    .ok()
                    .and_then(|v| error_message(&v));
                BackendError::Rejected(message)
            }
            other => BackendError::Unreachable(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a new client targeting the provided base URL. No timeout is set:
    /// clipping a long video can take minutes.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Returns the base URL configured for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/clip`. The payload is returned whatever the status, so an
    /// `{ "error": ... }` answer reaches the caller intact.
    pub async fn clip(&self, request: &ClipRequest) -> Result<Value, ClientError> {
        let url = format!("{}/api/clip", self.base_url);
        let response = self.http.post(url).json(request).send().await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `POST /api/download`, buffering the attachment.
    pub async fn download(&self, download_url: &str) -> Result<DownloadedVideo, ClientError> {
        let url = format!("{}/api/download", self.base_url);
        let request = DownloadRequest {
            download_url: Some(download_url.to_string()),
        };
        let response = self.http.post(url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::UnexpectedStatus { status, body });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_VIDEO_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        Ok(DownloadedVideo {
            bytes,
            content_type,
        })
    }
}

#[async_trait]
impl ClipBackend for ApiClient {
    async fn clip(&self, request: &ClipRequest) -> Result<Value, BackendError> {
        Ok(ApiClient::clip(self, request).await?)
    }

    async fn download(&self, url: &str) -> Result<DownloadedVideo, BackendError> {
        Ok(ApiClient::download(self, url).await?)
    }
}
