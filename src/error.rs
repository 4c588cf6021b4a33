#![allow(dead_code)]
//! Domain error types for bluetrip
//!
//! Provides structured error types for different domains:
//! - `RecommendError` for the AI recommendation fetch
//! - `BluetripError` as the top-level error type

use thiserror::Error;

/// Top-level error type for bluetrip
#[derive(Debug, Error)]
pub enum BluetripError {
    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors from the AI recommendation fetch.
///
/// These never cross the fetch boundary: `recommend::fetch_recommendations`
/// logs them and resolves to an empty list.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("No API key configured (set api_key in config.toml or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("Response contained no candidates")]
    EmptyResponse,
}

/// Result type alias for BluetripError
pub type Result<T> = std::result::Result<T, BluetripError>;

/// Result type alias for RecommendError
pub type RecommendResult<T> = std::result::Result<T, RecommendError>;

impl From<String> for BluetripError {
    fn from(msg: String) -> Self {
        BluetripError::Other(msg)
    }
}

impl From<&str> for BluetripError {
    fn from(msg: &str) -> Self {
        BluetripError::Other(msg.to_string())
    }
}
