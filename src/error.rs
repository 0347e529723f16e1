//! Unified error types for pinboardin
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error talking to the remote API
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Response body did not match the expected record shape
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the HTTP fetch step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Can't access pinboard API server: {0}")]
    Unreachable(String),

    /// HTTP 429
    #[error("Too many requests to the pinboard API. Come back later")]
    RateLimited,

    /// Any other non-200 status
    #[error("Unexpected status code: {status}. Expecting: 200")]
    UnexpectedStatus { status: u16 },

    /// Reading the body of a successful response failed
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
