//! TfL unified API HTTP client.
//!
//! Provides async methods for the three upstream queries the gateway makes.
//! Credentials are appended to every request as query parameters.

use std::sync::Arc;

use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{StationCode, TubeLine};

use super::error::TflError;
use super::types::{Arrival, LineStatusEntry, RouteSequence};

/// Default base URL for the TfL unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Path for the status of every tube line.
pub(crate) const LINE_STATUS_PATH: &str = "/line/mode/tube/status";

/// Path for predicted arrivals at a stop.
pub(crate) fn arrivals_path(code: &StationCode) -> String {
    format!("/StopPoint/{}/arrivals", code.as_str())
}

/// Path for the outbound station sequence of a line.
pub(crate) fn route_sequence_path(line: TubeLine) -> String {
    format!("/line/{}/route/sequence/outbound", line.id())
}

/// Parse an upstream response body, keeping a prefix of it for diagnostics.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, TflError> {
    serde_json::from_str(body).map_err(|e| TflError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

/// The reason phrase the upstream sent with its status line.
///
/// hyper only records a phrase that differs from the canonical one, so the
/// canonical phrase stands in when none was recorded.
fn reason_phrase(response: &reqwest::Response) -> String {
    if let Some(phrase) = response.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(phrase.as_bytes()).into_owned();
    }

    response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string()
}

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application id, sent as `app_id`
    pub app_id: String,
    /// Application key, sent as `app_key`
    pub app_key: String,
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfL unified API client.
///
/// Uses a semaphore to bound concurrent outbound requests.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Vec<(&'static str, String)>,
    semaphore: Arc<Semaphore>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        if config.max_concurrent == 0 {
            return Err(TflError::Config("max_concurrent must be at least 1".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        // Unset credentials are left off the query rather than sent empty
        let credentials = [("app_id", config.app_id), ("app_key", config.app_key)]
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get predicted arrivals at a stop, in upstream order.
    pub async fn get_arrivals(&self, code: &StationCode) -> Result<Vec<Arrival>, TflError> {
        self.get_json(&arrivals_path(code)).await
    }

    /// Get the current status of every tube line.
    pub async fn get_line_statuses(&self) -> Result<Vec<LineStatusEntry>, TflError> {
        self.get_json(LINE_STATUS_PATH).await
    }

    /// Get the outbound station sequence of a line.
    pub async fn get_route_sequence(&self, line: TubeLine) -> Result<RouteSequence, TflError> {
        self.get_json(&route_sequence_path(line)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TflError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TflError::Config("request limiter is closed".to_string()))?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path, "upstream request");

        let response = self
            .http
            .get(&url)
            .query(&self.credentials)
            .send()
            .await?;

        let status = response.status();

        // Anything but 200 is a refusal, including other 2xx codes
        if status != StatusCode::OK {
            let reason = reason_phrase(&response);
            tracing::warn!(
                path,
                status = status.as_u16(),
                reason = %reason,
                "upstream request failed"
            );
            return Err(TflError::Status {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}
