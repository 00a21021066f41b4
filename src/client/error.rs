//! Error types for fleet API fetches.

use thiserror::Error;

/// Errors that can occur while fetching a fleet data feed.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Request timeout
    #[error("request to {endpoint} timed out after {seconds}s")]
    Timeout { endpoint: String, seconds: u64 },

    /// Connection failed
    #[error("connection to {endpoint} failed: {message}")]
    Connection { endpoint: String, message: String },

    /// Non-2xx HTTP status
    #[error("{endpoint} returned HTTP {status}")]
    Http { endpoint: String, status: u16 },

    /// Malformed response body
    #[error("invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl ClientError {
    /// Classify a reqwest error for the given endpoint.
    pub(crate) fn from_reqwest(endpoint: &str, error: reqwest::Error, timeout_seconds: u64) -> Self {
        if error.is_timeout() {
            ClientError::Timeout {
                endpoint: endpoint.to_string(),
                seconds: timeout_seconds,
            }
        } else if error.is_decode() {
            ClientError::Decode {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        } else {
            ClientError::Connection {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        }
    }
}
