#![warn(missing_docs)]
//! # SortBench
//!
//! Benchmark engine for classic comparison sorts.
//!
//! SortBench times six hand-written algorithms and two library baselines on
//! independent copies of one input:
//! - **Algorithms**: bubble, selection, insertion, merge, quick (Lomuto), heap
//! - **Baselines**: `slice::sort_unstable` and rayon's `par_sort_unstable`
//! - **Single-shot timing**: one run per algorithm, milliseconds as `f64`
//! - **Comparison figures**: closed-form `n(n-1)/2` or live instrumented counts
//! - **Stress runs**: random input with quadratic algorithms gated by size
//! - **Traces**: every intermediate state of one algorithm
//!
//! ## Quick Start
//!
//! ```ignore
//! use sortbench::prelude::*;
//!
//! let report = Executor::default().compare(&[5, 3, 8, 1, 9, 2]);
//! for (name, result) in report.ranked() {
//!     println!("{name}: {:.3} ms, {} comparisons", result.duration, result.comparisons);
//! }
//! ```
//!
//! ## Stress Runs
//!
//! ```ignore
//! let plan = build_stress_plan(&StressConfig::new(100_000).with_seed(42))?;
//! // 100_000 > 50_000: bubble, selection and insertion are left out
//! let report = Executor::default().stress(&plan);
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, Complexity, CountingMode, Counters, HAS_CYCLE_COUNTER, Measured, NoopProbe, Probe,
    QUADRATIC_THRESHOLD, SortbenchError, StepRecorder, VALUE_UPPER_BOUND, algorithms,
    count_comparisons, is_sorted, measure, measure_millis, random_sequence,
};

// Re-export report types
pub use sortbench_report::{
    AlgorithmResult, AnalyticsReport, BenchmarkReport, OutputFormat, Report, SortOutcome,
    TraceOutcome,
};

// Re-export orchestration
pub use sortbench_cli::{
    ExecutionConfig, Executor, RunMode, StressConfig, StressPlan, TRACE_VALUE_BUDGET, analytics,
    build_stress_plan, select_algorithms,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, BenchmarkReport, CountingMode, ExecutionConfig, Executor, StressConfig,
        build_stress_plan,
    };
}

/// Run the SortBench CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     sortbench::run().unwrap();
/// }
/// ```
pub use sortbench_cli::run;
