//! Error types for deck_import
//!
//! Card lookups never surface errors to callers of the resolver; these
//! cover the surrounding tool (reading input, configuration, output).

use mtg_common::ApiError;
use std::fmt;

/// Unified error type for deck_import operations
#[derive(Debug)]
pub enum ImportError {
    /// Reading the decklist failed
    Io(std::io::Error),
    /// Invalid resolver or CLI configuration
    Config(String),
    /// Building the HTTP client or talking to Scryfall failed
    Api(ApiError),
    /// Failed to serialize output
    Serialize(serde_json::Error),
}

pub type Error = ImportError;

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "I/O error: {}", e),
            ImportError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ImportError::Api(e) => write!(f, "Scryfall error: {}", e),
            ImportError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Config(_) => None,
            ImportError::Api(e) => Some(e),
            ImportError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Io(err)
    }
}

impl From<ApiError> for ImportError {
    fn from(err: ApiError) -> Self {
        ImportError::Api(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Serialize(err)
    }
}

/// Result alias for deck_import operations
pub type Result<T> = std::result::Result<T, ImportError>;
