//! Deterministic JSON output.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for report rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to JSON with 2-space indentation and a trailing
/// newline. Field order follows declaration order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use reqres_domain::{AssertionResult, ScenarioResult, SuiteReport};

    fn report() -> SuiteReport {
        let started = Utc.with_ymd_and_hms(2024, 5, 1, 10, 20, 30).unwrap();
        SuiteReport::new(
            started,
            vec![
                ScenarioResult::from_assertions(
                    "sorted_years",
                    vec![AssertionResult::pass("years ascending")],
                    12,
                ),
                ScenarioResult::skipped("account_balance", "balance endpoint not configured"),
            ],
            40,
        )
    }

    #[test]
    fn test_trailing_newline_and_indent() {
        let json = to_json_stable(&report()).unwrap();
        assert!(json.ends_with('\n'));
        assert!(json.contains("\n  \"run_id\""));
    }

    #[test]
    fn test_report_json_shape() {
        let report = report();
        let json = to_json_stable(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["scenarios"][0]["outcome"], "passed");
        assert_eq!(value["scenarios"][1]["outcome"], "skipped");
        assert_eq!(
            value["scenarios"][1]["message"],
            "balance endpoint not configured"
        );
        assert_eq!(value["run_id"], report.run_id.to_string());
        assert!(value["scenarios"][0]["assertions"][0].get("error").is_none());
    }

    #[test]
    fn test_output_is_deterministic() {
        let report = report();
        assert_eq!(
            to_json_stable(&report).unwrap(),
            to_json_stable(&report).unwrap()
        );
    }
}
