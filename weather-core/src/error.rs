//! Error types
//!
//! Every way a fetch can fail is a [`TransportError`]. The store treats all
//! variants the same; the variant only exists so logs can tell a dead network
//! from a 401 from a payload that changed shape.

use thiserror::Error;

/// Any failure that prevents a usable snapshot from being obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS, connect, TLS, timeout or reset
    #[error("request failed: {0}")]
    Network(String),

    /// Server answered outside the 2xx range
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// 2xx with nothing in it
    #[error("empty response body")]
    EmptyBody,

    /// 2xx with a body that is not a weather snapshot
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Network(_) => "network",
            TransportError::Status { .. } => "status",
            TransportError::EmptyBody => "empty_body",
            TransportError::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

/// Invalid static configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
