use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::constants::DOWNLOAD_URL_SCHEME;

/// Body sent to the clipping server's `/clip` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRequest {
    #[serde(rename = "tweetUrl")]
    pub tweet_url: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl ClipRequest {
    pub fn new(tweet_url: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            tweet_url: tweet_url.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Successful answer from the clipping server.
///
/// `download_url` is a scheme-less `host:path` locator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipResponse {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

impl ClipResponse {
    /// Picks the locator out of a relayed payload, if it carries one.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        payload
            .get("downloadUrl")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(|s| ClipResponse {
                download_url: s.to_string(),
            })
    }

    /// Builds the absolute URL handed to the download relay.
    ///
    /// The locator is assumed to be scheme-less. A locator that already has a
    /// scheme is still prefixed, but the mismatch is logged.
    pub fn absolute_url(&self) -> String {
        if self.download_url.contains("://") {
            warn!(
                locator = %self.download_url,
                "clipping server returned a locator with a scheme; prefixing anyway"
            );
        }
        format!("{}{}", DOWNLOAD_URL_SCHEME, self.download_url)
    }
}

/// Error message carried by an `{ "error": "..." }` payload.
pub fn error_message(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Body of `POST /api/download`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadRequest {
    #[serde(rename = "downloadUrl", default)]
    pub download_url: Option<String>,
}

/// JSON error body returned by the API routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
