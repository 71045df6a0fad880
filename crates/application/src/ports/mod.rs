//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the suite and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod http_client;
mod token_source;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError, HttpFuture};
pub use token_source::{AuthError, TokenFuture, TokenSource};
