//! Sequential suite runner.
//!
//! Runs every scenario one after the other against a shared, read-only
//! context and turns each into a [`ScenarioResult`]. A failing or erroring
//! scenario never prevents the next one from running.

use std::time::Instant;

use tracing::{info, info_span, warn, Instrument};

use reqres_domain::{Outcome, ScenarioResult, SuiteReport};

use crate::error::UnmatchedFilters;
use crate::scenarios::{Scenario, SuiteContext};

/// Runs a list of scenarios.
pub struct SuiteRunner {
    scenarios: Vec<Box<dyn Scenario>>,
    filters: Vec<String>,
}

impl SuiteRunner {
    /// Create a runner over `scenarios`, kept in the given order.
    #[must_use]
    pub fn new(scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self {
            scenarios,
            filters: Vec::new(),
        }
    }

    /// Only run scenarios whose name contains one of `filters`.
    ///
    /// An empty list runs everything.
    ///
    /// # Errors
    ///
    /// Returns the filters that match no scenario name.
    pub fn with_filters(mut self, filters: Vec<String>) -> Result<Self, UnmatchedFilters> {
        let unmatched: Vec<String> = filters
            .iter()
            .filter(|f| !self.scenarios.iter().any(|s| s.name().contains(f.as_str())))
            .cloned()
            .collect();
        if !unmatched.is_empty() {
            return Err(UnmatchedFilters { filters: unmatched });
        }
        self.filters = filters;
        Ok(self)
    }

    /// Names of all scenarios, in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    fn is_selected(&self, name: &str) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|f| name.contains(f.as_str()))
    }

    /// Run the suite.
    pub async fn run(&self, ctx: &SuiteContext) -> SuiteReport {
        let started_at = ctx.clock().now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(self.scenarios.len());

        for scenario in &self.scenarios {
            let name = scenario.name();
            if !self.is_selected(name) {
                results.push(ScenarioResult::skipped(name, "excluded by filter"));
                continue;
            }
            let result = Self::run_one(scenario.as_ref(), ctx)
                .instrument(info_span!("scenario", name))
                .await;
            results.push(result);
        }

        let report = SuiteReport::new(started_at, results, elapsed_ms(start));
        info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            skipped = report.skipped,
            duration_ms = report.duration_ms,
            "suite finished"
        );
        report
    }

    async fn run_one(scenario: &dyn Scenario, ctx: &SuiteContext) -> ScenarioResult {
        let name = scenario.name();
        info!("running");
        let start = Instant::now();
        let outcome = scenario.run(ctx).await;
        let duration_ms = elapsed_ms(start);

        let result = match outcome {
            Ok(assertions) => ScenarioResult::from_assertions(name, assertions, duration_ms),
            Err(e) => ScenarioResult::terminated(name, e.outcome(), e.to_string(), duration_ms),
        };

        match result.outcome {
            Outcome::Passed => info!(duration_ms, "passed"),
            Outcome::Skipped => info!(reason = result.message.as_deref(), "skipped"),
            Outcome::Failed | Outcome::Errored => warn!(
                outcome = result.outcome.label(),
                message = result.message.as_deref(),
                duration_ms,
                "did not pass"
            ),
        }
        result
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
