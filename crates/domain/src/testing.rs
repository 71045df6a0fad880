//! Scenario results and the suite report.
//!
//! This module provides the types produced by running scenarios against the
//! service: individual assertion results, per-scenario outcomes and the
//! aggregated report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status code a response must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusExpectation {
    code: u16,
}

impl StatusExpectation {
    /// Create an exact status expectation.
    #[must_use]
    pub const fn exact(code: u16) -> Self {
        Self { code }
    }

    /// Check if a status code matches this expectation.
    #[must_use]
    pub const fn matches(&self, status: u16) -> bool {
        status == self.code
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        format!("= {}", self.code)
    }
}

/// Result of one assertion inside a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// What was checked.
    pub description: String,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Actual value found (for display).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Error message if failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssertionResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            actual: None,
            error: None,
        }
    }

    /// Create a passed result with actual value.
    #[must_use]
    pub fn pass_with_value(description: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(description: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Create a failed result with actual value.
    #[must_use]
    pub fn fail_with_value(
        description: impl Into<String>,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            passed: false,
            actual: Some(actual.into()),
            error: Some(error.into()),
        }
    }
}

/// Final state of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All assertions held.
    Passed,
    /// Status mismatch or an assertion did not hold.
    Failed,
    /// The scenario could not reach its assertions.
    Errored,
    /// Not executed.
    Skipped,
}

impl Outcome {
    /// Short label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::Errored => "ERROR",
            Self::Skipped => "SKIP",
        }
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario identifier.
    pub name: String,
    /// Final state.
    pub outcome: Outcome,
    /// Individual assertion results.
    #[serde(default)]
    pub assertions: Vec<AssertionResult>,
    /// Failure or error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioResult {
    /// Builds a result from assertion results; failed if any assertion failed.
    #[must_use]
    pub fn from_assertions(
        name: impl Into<String>,
        assertions: Vec<AssertionResult>,
        duration_ms: u64,
    ) -> Self {
        let failed: Vec<&str> = assertions
            .iter()
            .filter(|a| !a.passed)
            .map(|a| a.description.as_str())
            .collect();
        let (outcome, message) = if failed.is_empty() {
            (Outcome::Passed, None)
        } else {
            (
                Outcome::Failed,
                Some(format!("assertion failed: {}", failed.join("; "))),
            )
        };
        Self {
            name: name.into(),
            outcome,
            assertions,
            message,
            duration_ms,
        }
    }

    /// Builds a result that ended before or outside assertions.
    #[must_use]
    pub fn terminated(
        name: impl Into<String>,
        outcome: Outcome,
        message: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            name: name.into(),
            outcome,
            assertions: Vec::new(),
            message: Some(message.into()),
            duration_ms,
        }
    }

    /// Builds a skipped result.
    #[must_use]
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::terminated(name, Outcome::Skipped, reason, 0)
    }
}

/// Results from running the whole suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Identifier of this run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Per-scenario results in execution order.
    pub scenarios: Vec<ScenarioResult>,
    /// Total number of scenarios.
    pub total: usize,
    /// Number passed.
    pub passed: usize,
    /// Number failed.
    pub failed: usize,
    /// Number errored.
    pub errored: usize,
    /// Number skipped.
    pub skipped: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Create a new report.
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        scenarios: Vec<ScenarioResult>,
        duration_ms: u64,
    ) -> Self {
        let count = |outcome: Outcome| scenarios.iter().filter(|s| s.outcome == outcome).count();
        let passed = count(Outcome::Passed);
        let failed = count(Outcome::Failed);
        let errored = count(Outcome::Errored);
        let skipped = count(Outcome::Skipped);

        Self {
            run_id: Uuid::now_v7(),
            started_at,
            total: scenarios.len(),
            scenarios,
            passed,
            failed,
            errored,
            skipped,
            duration_ms,
        }
    }

    /// True when nothing failed or errored.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Get pass rate as percentage of executed scenarios.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        let executed = self.total - self.skipped;
        if executed == 0 {
            100.0
        } else {
            (self.passed as f64 / executed as f64) * 100.0
        }
    }

    /// Looks up a scenario result by name.
    #[must_use]
    pub fn scenario(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}
