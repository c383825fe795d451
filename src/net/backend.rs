//! HTTP client for the local game-state backend.
//!
//! Thin wrapper over `reqwest` for the three polled endpoints. Pure parsing
//! in `parse_body` for testability. Any non-2xx status or malformed body is
//! a [`FetchError`]; callers treat every error the same way.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{AugmentSnapshot, BuildResponse, ChampSelectSnapshot, Endpoint, FetchError};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Per-request time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request: Duration::from_secs(2), connect: Duration::from_millis(500) }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can produce the three snapshots. Implemented by
/// [`BackendClient`] and by test doubles.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails or the body is malformed.
    async fn champ_select(&self) -> Result<ChampSelectSnapshot, FetchError>;

    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails or the body is malformed.
    async fn augments(&self) -> Result<AugmentSnapshot, FetchError>;

    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails or the body is malformed.
    async fn build(&self) -> Result<BuildResponse, FetchError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns [`FetchError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: HttpTimeouts) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| FetchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let response = self
            .http
            .get(self.url_for(endpoint))
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        parse_body(&text)
    }
}

#[async_trait::async_trait]
impl SnapshotSource for BackendClient {
    async fn champ_select(&self) -> Result<ChampSelectSnapshot, FetchError> {
        self.get(Endpoint::ChampSelect).await
    }

    async fn augments(&self) -> Result<AugmentSnapshot, FetchError> {
        self.get(Endpoint::Augments).await
    }

    async fn build(&self) -> Result<BuildResponse, FetchError> {
        self.get(Endpoint::Build).await
    }
}

/// Decode a JSON response body.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if the body is not valid JSON of shape `T`.
pub fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::Parse(e.to_string()))
}
