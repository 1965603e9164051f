//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the metadata envelope and the command payload side by side.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Parse a report previously written by [`generate_json_report`].
pub fn parse_json_report(json: &str) -> Result<Report, serde_json::Error> {
    serde_json::from_str(json)
}
