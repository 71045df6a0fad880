//! Bearer token acquisition port

use std::future::Future;
use std::pin::Pin;

use reqres_domain::BearerToken;
use thiserror::Error;

/// Errors raised while obtaining a bearer token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The authorization endpoint could not be reached.
    #[error("network error: {message}")]
    Network {
        /// Underlying message.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("authorization rejected with status {status}: {body}")]
    Rejected {
        /// Response status.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The response did not carry a usable token.
    #[error("response has no token in field '{field}'")]
    MissingToken {
        /// Field that was expected to hold the token.
        field: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid authorization response: {0}")]
    InvalidResponse(String),
}

/// Future returned by [`TokenSource::acquire`].
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<BearerToken, AuthError>> + Send + 'a>>;

/// Port for obtaining the bearer token used by authenticated scenarios.
pub trait TokenSource: Send + Sync {
    /// Obtains a token.
    fn acquire(&self) -> TokenFuture<'_>;
}
