//! Clip form controller.
//!
//! Owns the form state, validates input, and drives the two relay hops in
//! order: clip request first, then the download of the returned locator.
//! Every state change is published on a `watch` channel so a renderer can
//! redraw while a call is outstanding.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::models::{ClipRequest, ClipResponse, error_message};
use crate::save::SaveSink;
use crate::services::download::DownloadedVideo;
use crate::validation::{is_form_valid, is_supported_url, is_valid_time};

const MISSING_URL: &str = "Please enter a Twitter URL";
const UNSUPPORTED_URL: &str = "Please enter a valid Twitter/X URL";
const CLIP_FAILED: &str = "Something went wrong.";
const DOWNLOAD_REJECTED: &str = "Download failed";
const DOWNLOAD_FAILED: &str = "Failed to download video";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    AwaitingDownload,
    Error,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::AwaitingDownload => "awaiting-download",
            Phase::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl TimeField {
    fn label(self) -> &'static str {
        match self {
            TimeField::Start => "Start time",
            TimeField::End => "End time",
        }
    }

    fn format_error(self) -> String {
        format!("{} must be in HH:MM:SS format (e.g., 00:01:30)", self.label())
    }
}

/// Everything the form shows. `error` and `time_error` are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub tweet_url: String,
    pub start: String,
    pub end: String,
    pub error: Option<String>,
    pub time_error: Option<String>,
    pub loading: bool,
    pub download_url: Option<String>,
    pub phase: Phase,
}

/// Failure reported by a backend hop.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The hop answered, but with an error. Carries its `error` message if any.
    #[error("rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    /// The hop could not be completed (network, decode).
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// The two hops the controller needs. Implemented in-process for the web form
/// and over HTTP for the CLI.
#[async_trait]
pub trait ClipBackend: Send + Sync {
    /// Relay a clip request and return the clipping server's payload verbatim.
    async fn clip(&self, request: &ClipRequest) -> Result<Value, BackendError>;

    /// Fetch the finished clip through the download proxy.
    async fn download(&self, url: &str) -> Result<DownloadedVideo, BackendError>;
}

pub struct UiController<B> {
    backend: B,
    state: UiState,
    tx: watch::Sender<UiState>,
}

impl<B: ClipBackend> UiController<B> {
    pub fn new(backend: B) -> Self {
        let (tx, _rx) = watch::channel(UiState::default());
        Self {
            backend,
            state: UiState::default(),
            tx,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Receiver that sees every published state.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.tx.subscribe()
    }

    pub fn set_tweet_url(&mut self, value: impl Into<String>) {
        self.state.tweet_url = value.into();
        self.publish();
    }

    /// One edit of a time field: stores the value and re-checks its format.
    pub fn set_time(&mut self, field: TimeField, value: impl Into<String>) {
        let value = value.into();
        self.state.time_error = if is_valid_time(&value) {
            None
        } else {
            Some(field.format_error())
        };
        match field {
            TimeField::Start => self.state.start = value,
            TimeField::End => self.state.end = value,
        }
        self.publish();
    }

    pub fn can_submit(&self) -> bool {
        !self.state.loading
            && is_form_valid(&self.state.tweet_url, &self.state.start, &self.state.end)
    }

    /// Runs one submission to completion and returns the resulting phase.
    ///
    /// Invalid input sets an inline error and makes no call. On success the
    /// clip is handed to `sink` and the fields are cleared; on any failure
    /// the fields keep their values.
    pub async fn submit<S: SaveSink + Send>(&mut self, sink: &mut S) -> Phase {
        if let Some(message) = self.admission_error() {
            self.state.error = Some(message);
            self.publish();
            return self.state.phase;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.download_url = None;
        self.transition(Phase::Submitting);

        let request = ClipRequest::new(
            self.state.tweet_url.clone(),
            self.state.start.clone(),
            self.state.end.clone(),
        );
        let outcome = self.relay(&request, sink).await;

        self.state.loading = false;
        match outcome {
            Ok(()) => {
                self.state.tweet_url.clear();
                self.state.start.clear();
                self.state.end.clear();
                self.state.time_error = None;
                self.transition(Phase::Idle);
            }
            Err(message) => {
                self.state.error = Some(message);
                self.transition(Phase::Error);
            }
        }
        self.state.phase
    }

    async fn relay<S: SaveSink + Send>(
        &mut self,
        request: &ClipRequest,
        sink: &mut S,
    ) -> Result<(), String> {
        let payload = self.backend.clip(request).await.map_err(|e| {
            warn!(error = %e, "clip request failed");
            match e {
                BackendError::Rejected(Some(message)) => message,
                _ => CLIP_FAILED.to_string(),
            }
        })?;

        let locator = ClipResponse::from_payload(&payload).ok_or_else(|| {
            warn!(%payload, "clipping server answered without a download URL");
            error_message(&payload).unwrap_or_else(|| CLIP_FAILED.to_string())
        })?;

        let url = locator.absolute_url();
        self.state.download_url = Some(url.clone());
        self.transition(Phase::AwaitingDownload);

        let video = self.backend.download(&url).await.map_err(|e| {
            warn!(error = %e, %url, "download failed");
            match e {
                BackendError::Rejected(message) => {
                    message.unwrap_or_else(|| DOWNLOAD_REJECTED.to_string())
                }
                BackendError::Unreachable(_) => DOWNLOAD_FAILED.to_string(),
            }
        })?;

        sink.save(video).map_err(|e| {
            warn!(error = %e, "saving clip failed");
            DOWNLOAD_FAILED.to_string()
        })
    }

    fn admission_error(&self) -> Option<String> {
        let state = &self.state;
        if state.tweet_url.trim().is_empty() {
            return Some(MISSING_URL.to_string());
        }
        if !is_supported_url(&state.tweet_url) {
            return Some(UNSUPPORTED_URL.to_string());
        }
        if !is_valid_time(&state.start) {
            return Some(TimeField::Start.format_error());
        }
        if !is_valid_time(&state.end) {
            return Some(TimeField::End.format_error());
        }
        None
    }

    fn transition(&mut self, phase: Phase) {
        info!(from = %self.state.phase, to = %phase, "clip form");
        self.state.phase = phase;
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.state.clone());
    }
}
