//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The response body does not match the expected payload shape.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),

    /// A timestamp could not be parsed.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The raw value received.
        value: String,
        /// Parser message.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
