//! Error types for the DHT client

/// Errors that can occur while talking to the sensor endpoints
#[derive(Debug, thiserror::Error)]
pub enum DhtError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for DHT client operations
pub type Result<T> = std::result::Result<T, DhtError>;
