//! Error types for geocoder

use crate::http::HttpError;
use thiserror::Error;

/// Main error type for geocoder operations
#[derive(Error, Debug)]
pub enum Error {
    /// A provider adapter was built without an HTTP adapter
    #[error("{provider} need an httpAdapter")]
    MissingDependency { provider: &'static str },

    /// A provider that requires an API key was built without one
    #[error("{provider} needs an apiKey")]
    MissingCredential { provider: &'static str },

    /// Geocode query is an IP literal
    #[error("{provider} does not support geocoding {kind}")]
    UnsupportedQueryKind {
        provider: &'static str,
        kind: IpKind,
    },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Error reported by the HTTP adapter, passed through untouched
    #[error(transparent)]
    Transport(HttpError),

    /// Callback-style lookup started outside a tokio runtime
    #[error("No async runtime: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// IP literal family rejected by geocode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpKind {
    V4,
    V6,
}

impl std::fmt::Display for IpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpKind::V4 => write!(f, "IPv4"),
            IpKind::V6 => write!(f, "IPv6"),
        }
    }
}

/// Result type alias for geocoder operations
pub type Result<T> = std::result::Result<T, Error>;
