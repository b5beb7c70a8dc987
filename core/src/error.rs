//! Error types for the todo API client.
//!
//! # Design
//! The taxonomy is flat. Transports produce the first three variants, the
//! parsers produce the rest. Every variant renders as a single line that a
//! frontend can show as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request URL could not be parsed by the transport.
    #[error("bad URL: {0}")]
    BadUrl(String),

    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, reset, and other transport faults.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a status outside 200-299.
    #[error("bad status: {status}")]
    BadStatus { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("bad body: {0}")]
    BadBody(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::BadStatus { status: 404, .. })
    }
}
