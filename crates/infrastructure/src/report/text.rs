//! Human-readable report.

use std::fmt::Write;

use reqres_domain::{Outcome, SuiteReport};

/// Renders one line per scenario, failed assertions indented beneath, and
/// a summary line.
#[must_use]
pub fn render_text(report: &SuiteReport) -> String {
    let mut out = String::new();
    let width = report
        .scenarios
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "run {}", report.run_id);
    for scenario in &report.scenarios {
        let _ = write!(
            out,
            "{:<5} {:<width$} {:>6}ms",
            scenario.outcome.label(),
            scenario.name,
            scenario.duration_ms,
        );
        if scenario.outcome != Outcome::Passed
            && let Some(message) = &scenario.message
        {
            let _ = write!(out, "  {message}");
        }
        out.push('\n');

        for assertion in scenario.assertions.iter().filter(|a| !a.passed) {
            let _ = write!(out, "      - {}", assertion.description);
            if let Some(error) = &assertion.error {
                let _ = write!(out, ": {error}");
            }
            out.push('\n');
        }
    }

    let _ = writeln!(
        out,
        "\n{} scenarios: {} passed, {} failed, {} errored, {} skipped ({:.1}% pass rate) in {}ms",
        report.total,
        report.passed,
        report.failed,
        report.errored,
        report.skipped,
        report.pass_rate(),
        report.duration_ms,
    );
    out
}
