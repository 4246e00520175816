//! Error types for the rankings gateway

use thiserror::Error;

/// Errors that can occur in the rankings gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Handler failed: {0}")]
    Handler(String),
}

/// A failed request, carried through warp as a rejection and rendered as a
/// 500 envelope by the recover handler
#[derive(Debug)]
pub struct ApiFailure {
    /// Client-facing summary, e.g. "Failed to fetch QB rankings"
    pub error: String,
    pub source: GatewayError,
}

impl warp::reject::Reject for ApiFailure {}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
