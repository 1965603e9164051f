#![warn(missing_docs)]
//! SortBench Report - Result Types and Output
//!
//! Defines what a run produces and how it is written out:
//! - `BenchmarkReport` / `AlgorithmResult` for compare and stress runs
//! - `SortOutcome`, `TraceOutcome` and `AnalyticsReport` for the other commands
//! - JSON (machine-readable) and CSV (spreadsheet-compatible) renderers

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::{generate_json_report, parse_json_report};
pub use report::{
    AlgorithmResult, AnalyticsReport, BenchmarkReport, Mode, Payload, Report, ReportMeta,
    SCHEMA_VERSION, SortOutcome, StressMeta, SystemInfo, TraceOutcome,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with metadata envelope
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format a millisecond figure with a unit that keeps it readable
pub fn format_duration(ms: f64) -> String {
    if ms >= 1_000.0 {
        format!("{:.2} s", ms / 1_000.0)
    } else if ms >= 1.0 {
        format!("{:.2} ms", ms)
    } else if ms >= 0.001 {
        format!("{:.2} µs", ms * 1_000.0)
    } else {
        format!("{:.0} ns", ms * 1_000_000.0)
    }
}
