//! Scenario error types

use reqres_domain::{DomainError, Outcome};
use thiserror::Error;

use crate::ports::HttpClientError;

/// Reasons a scenario stops before all its assertions ran.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScenarioError {
    /// The response status did not match the response specification.
    #[error("expected status {expected}, got {actual}: {body}")]
    UnexpectedStatus {
        /// Expectation description.
        expected: String,
        /// Status received.
        actual: u16,
        /// Body preview.
        body: String,
    },

    /// The body could not be decoded into the expected record.
    #[error("could not decode {target}: {reason}")]
    Deserialization {
        /// Record type.
        target: String,
        /// Decoder message.
        reason: String,
    },

    /// The HTTP call failed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// A request could not be built or a value could not be interpreted.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A shared prerequisite such as the bearer token is unavailable.
    #[error("missing prerequisite: {0}")]
    MissingPrerequisite(String),

    /// The scenario's target is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ScenarioError {
    /// Maps the error onto the scenario outcome it produces.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::UnexpectedStatus { .. } => Outcome::Failed,
            Self::NotConfigured(_) => Outcome::Skipped,
            Self::Deserialization { .. }
            | Self::Http(_)
            | Self::Domain(_)
            | Self::MissingPrerequisite(_) => Outcome::Errored,
        }
    }
}

/// Result type alias for scenario steps.
pub type ScenarioOutcome<T> = Result<T, ScenarioError>;

/// Name filters that select no scenario.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no scenario name contains {}", .filters.join(", "))]
pub struct UnmatchedFilters {
    /// Filters without a match.
    pub filters: Vec<String>,
}
