//! Relay to the external clipping server.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::constants::CLIP_PATH;
use crate::models::ClipRequest;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("clipping server returned a non-JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Forwards clip requests to `{server}/clip` and hands back whatever JSON it answers.
#[derive(Debug, Clone)]
pub struct ClipRelay {
    endpoint: String,
    http: Client,
}

impl ClipRelay {
    pub fn new(server_url: &str, http: Client) -> Self {
        Self {
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), CLIP_PATH),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST per call. The body is parsed as JSON whatever the status or
    /// content type, since the server may answer errors with a JSON payload.
    pub async fn clip(&self, request: &ClipRequest) -> Result<Value, RelayError> {
        info!(
            tweet_url = %request.tweet_url,
            start = %request.start,
            end = %request.end,
            "relaying clip request"
        );

        let resp = self.http.post(&self.endpoint).json(request).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(%status, bytes = body.len(), "clipping server answered");

        Ok(serde_json::from_slice(&body)?)
    }
}
