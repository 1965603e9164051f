//! Benchmark Executor
//!
//! Runs algorithms on cloned inputs and turns their results into reports.
//!
//! ## Pipeline Overview
//!
//! ```text
//! input sequence / StressPlan
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Clone, time one run per algorithm, count comparisons
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Wrap the payload with metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sort, compare, stress and trace runs
//! - [`analytics`] - Static reference figures
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod analytics;
mod execution;
mod formatting;
mod metadata;
mod report;

// Re-export public API
pub use analytics::analytics;
pub use execution::{ExecutionConfig, Executor, RunMode, TRACE_VALUE_BUDGET};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use report::{build_report, build_stress_report};
