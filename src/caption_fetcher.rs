use std::time::Duration;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::caption_extractor::CaptionExtractor;
use crate::errors::FetchError;

// @module: Remote caption track fetching

// @const: Default per-request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for downloading raw WebVTT caption tracks.
///
/// Fetch failures are expected in the wild (expired caption URLs, missing
/// tracks) and must never block the surrounding content-collection workflow,
/// so `fetch_transcript` degrades to an empty transcript instead of erroring.
pub struct CaptionFetcher {
    /// HTTP client for caption requests
    client: Client,

    /// Per-request timeout
    timeout: Duration,
}

impl CaptionFetcher {
    /// Create a fetcher with the default request timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        CaptionFetcher {
            client: Client::new(),
            timeout,
        }
    }

    /// Fetch the raw caption track text from an http(s) URL.
    pub async fn fetch(&self, caption_url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(caption_url).map_err(|e| FetchError::InvalidUrl {
            url: caption_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::InvalidUrl {
                url: caption_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        debug!("Fetching caption track from {}", caption_url);

        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status_code: status.as_u16(),
                url: caption_url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::ReadBody(e.to_string()))
    }

    /// Fetch a caption track and extract its transcript, best-effort.
    ///
    /// Any fetch failure is logged and yields an empty transcript; the caller
    /// proceeds without captions.
    pub async fn fetch_transcript(&self, caption_url: &str) -> String {
        match self.fetch(caption_url).await {
            Ok(raw_track) => CaptionExtractor::extract(&raw_track),
            Err(e) => {
                warn!("Caption fetch failed, continuing without captions: {}", e);
                String::new()
            }
        }
    }

    /// Check whether an input string looks like a fetchable caption URL.
    pub fn is_caption_url(input: &str) -> bool {
        match Url::parse(input) {
            Ok(parsed) => parsed.scheme() == "http" || parsed.scheme() == "https",
            Err(_) => false,
        }
    }
}

impl Default for CaptionFetcher {
    fn default() -> Self {
        Self::new()
    }
}
