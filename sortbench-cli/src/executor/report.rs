//! Report Building
//!
//! Wraps a command's payload in the metadata envelope.
//!
//! ```text
//!   payload (SortOutcome | TraceOutcome | BenchmarkReport | AnalyticsReport)
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │     ReportMeta      │  schema, version, mode, system, stress echo
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │      Report         │  Ready for JSON/CSV/human output
//!   └─────────────────────┘
//! ```

use super::metadata::build_report_meta;
use crate::planner::StressPlan;
use sortbench_report::{BenchmarkReport, Mode, Payload, Report, StressMeta};

/// Build a complete Report for a command run in `mode`
pub fn build_report(mode: Mode, payload: Payload) -> Report {
    Report {
        meta: build_report_meta(mode),
        payload,
    }
}

/// Build a stress-test Report, echoing the plan into the metadata
pub fn build_stress_report(plan: &StressPlan, results: BenchmarkReport) -> Report {
    let mut report = build_report(Mode::StressTest, Payload::Benchmark(results));
    report.meta.stress = Some(StressMeta {
        size: plan.size,
        threshold: plan.threshold,
        quadratic_skipped: plan.quadratic_skipped(),
        seed: plan.seed,
    });
    report
}
