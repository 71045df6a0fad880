//! Assertion collector used by scenarios.

use std::fmt::Debug;

use reqres_domain::AssertionResult;

/// Collects assertion results; a failed assertion does not stop collection.
#[derive(Debug, Default)]
pub struct Expectations {
    results: Vec<AssertionResult>,
}

impl Expectations {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Asserts `actual == expected`.
    pub fn equals<T: PartialEq + Debug + ?Sized>(
        &mut self,
        description: impl Into<String>,
        expected: &T,
        actual: &T,
    ) -> &mut Self {
        let description = description.into();
        let shown = format!("{actual:?}");
        let result = if actual == expected {
            AssertionResult::pass_with_value(description, shown)
        } else {
            AssertionResult::fail_with_value(
                description,
                shown,
                format!("expected {expected:?}, got {actual:?}"),
            )
        };
        self.results.push(result);
        self
    }

    /// Asserts a condition, recording `actual` for display.
    pub fn holds(
        &mut self,
        description: impl Into<String>,
        condition: bool,
        actual: impl Into<String>,
    ) -> &mut Self {
        let description = description.into();
        let result = if condition {
            AssertionResult::pass_with_value(description, actual)
        } else {
            let actual = actual.into();
            let error = format!("condition not met for {actual}");
            AssertionResult::fail_with_value(description, actual, error)
        };
        self.results.push(result);
        self
    }

    /// Asserts that an optional value is present.
    pub fn present<T: Debug>(
        &mut self,
        description: impl Into<String>,
        value: Option<&T>,
    ) -> &mut Self {
        let description = description.into();
        let result = match value {
            Some(v) => AssertionResult::pass_with_value(description, format!("{v:?}")),
            None => AssertionResult::fail(description, "value is null or missing"),
        };
        self.results.push(result);
        self
    }

    /// Returns true if nothing failed so far.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Consumes the collector.
    #[must_use]
    pub fn into_results(self) -> Vec<AssertionResult> {
        self.results
    }
}
