//! TfL client error types.

/// Errors from the TfL HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API answered with a status other than 200; `reason` is its reason phrase
    #[error("upstream returned {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Client could not be built from its configuration
    #[error("invalid client configuration: {0}")]
    Config(String),
}
