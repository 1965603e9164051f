//! Reference Analytics
//!
//! Fixed per-algorithm figures for dashboards. They are illustrative
//! constants and are never derived from a run.

use sortbench_core::Algorithm;
use sortbench_report::AnalyticsReport;

/// Reference timings in milliseconds, in listing order
const REFERENCE_TIMES: [(Algorithm, f64); 6] = [
    (Algorithm::BubbleSort, 125.0),
    (Algorithm::SelectionSort, 110.0),
    (Algorithm::InsertionSort, 95.0),
    (Algorithm::MergeSort, 45.0),
    (Algorithm::QuickSort, 38.0),
    (Algorithm::HeapSort, 50.0),
];

/// The static analytics table
pub fn analytics() -> AnalyticsReport {
    let (algorithms, times) = REFERENCE_TIMES
        .iter()
        .map(|&(algorithm, ms)| (algorithm.name().to_string(), ms))
        .unzip();
    AnalyticsReport { algorithms, times }
}
