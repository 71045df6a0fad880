//! Suite report rendering.

mod json;
mod text;

pub use json::{ReportError, to_json_stable};
pub use text::render_text;

use reqres_domain::SuiteReport;

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty JSON.
    Json,
}

/// Renders `report` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &SuiteReport, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => to_json_stable(report),
    }
}
