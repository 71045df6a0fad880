//! Reqres Application - Scenarios, ports and the runner
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for HTTP, time and token acquisition)
//! - The request/response specification applied to each call
//! - The scenario catalogue and the sequential suite runner

pub mod error;
pub mod expect;
pub mod ports;
pub mod runner;
pub mod scenarios;
pub mod specification;

#[cfg(test)]
mod testing;

pub use error::{ScenarioError, ScenarioOutcome, UnmatchedFilters};
pub use ports::{AuthError, Clock, HttpClient, HttpClientError, TokenSource};
pub use runner::SuiteRunner;
pub use scenarios::{
    BootstrapToken, RegistrationCase, RegistrationExpectation, Scenario, ScenarioSettings,
    SuiteContext, catalog,
};
pub use specification::Specification;
