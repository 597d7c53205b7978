//! Error types for Scryfall API access

use thiserror::Error;

/// Unified error type for Scryfall API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Scryfall returned an error object
    #[error("{code}: {details}")]
    ApiResponse {
        status: u16,
        code: String,
        details: String,
    },
    /// HTTP error status code without a Scryfall error body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Card resolved but carries no usable image
    #[error("No image available for card: {0}")]
    NoImageAvailable(String),
}

impl ApiError {
    /// Whether repeating the same request could succeed.
    ///
    /// Network failures, rate limiting (429) and server errors (5xx) are
    /// transient. Client errors such as `not_found` and malformed payloads
    /// are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::ApiResponse { status, .. } => *status == 429 || *status >= 500,
            ApiError::HttpStatus(status) => {
                *status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            ApiError::Parse(_) | ApiError::NoImageAvailable(_) => false,
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
