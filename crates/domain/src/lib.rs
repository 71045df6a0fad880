//! Reqres Domain - Core types for the reqres API suite
//!
//! This crate defines request/response specifications, the payloads
//! exchanged with the service, the checks applied to them and the result
//! types reported by the runner. All types here are pure Rust with no I/O.

pub mod auth;
pub mod checks;
pub mod error;
pub mod payload;
pub mod request;
pub mod response;
pub mod testing;

pub use auth::BearerToken;
pub use checks::{TimestampComparison, TimestampPrecision};
pub use error::{DomainError, DomainResult};
pub use payload::{
    AccountBalance, ColorData, RegisterFailure, RegisterRequest, RegisterSuccess, UpdateResponse,
    UpdateUser, User,
};
pub use request::{HttpMethod, PreparedRequest, RequestDefaults, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use testing::{AssertionResult, Outcome, ScenarioResult, StatusExpectation, SuiteReport};
