//! In-process backend for the clip form: calls the relays directly instead of
//! going back through this server's own HTTP routes.

use async_trait::async_trait;
use serde_json::Value;

use crate::models::ClipRequest;
use crate::services::clip::ClipRelay;
use crate::services::download::{DownloadRelay, DownloadedVideo};
use crate::ui::{BackendError, ClipBackend};

#[derive(Debug, Clone)]
pub struct RelayBackend {
    clip: ClipRelay,
    download: DownloadRelay,
}

impl RelayBackend {
    pub fn new(clip: ClipRelay, download: DownloadRelay) -> Self {
        Self { clip, download }
    }
}

#[async_trait]
impl ClipBackend for RelayBackend {
    async fn clip(&self, request: &ClipRequest) -> Result<Value, BackendError> {
        self.clip
            .clip(request)
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))
    }

    /// Failures surface with the same message the download route would send.
    async fn download(&self, url: &str) -> Result<DownloadedVideo, BackendError> {
        self.download
            .fetch(url)
            .await
            .map_err(|e| BackendError::Rejected(Some(e.api_error().message.to_string())))
    }
}
