//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::Algorithm;
use std::collections::BTreeMap;

/// Current JSON schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Complete output of one command: metadata plus the command's payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Command output, flattened next to `meta`
    #[serde(flatten)]
    pub payload: Payload,
}

/// Command-specific body of a [`Report`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// `sort`
    Sort(SortOutcome),
    /// `trace`
    Trace(TraceOutcome),
    /// `compare` and `stress-test`
    Benchmark(BenchmarkReport),
    /// `analytics`
    Analytics(AnalyticsReport),
}

/// Which command produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Bubble sort entry point
    Sort,
    /// Six-algorithm comparison
    Compare,
    /// Size-gated random run
    StressTest,
    /// Static reference figures
    Analytics,
    /// Step-by-step trace
    Trace,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// JSON schema version ([`SCHEMA_VERSION`])
    pub schema_version: u32,
    /// SortBench version that produced the report
    pub version: String,
    /// Generation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Command that produced the report
    pub mode: Mode,
    /// Host the run happened on
    pub system: SystemInfo,
    /// Stress parameters, for stress runs only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<StressMeta>,
}

/// Parameters of a stress run, echoed into the metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressMeta {
    /// Generated sequence length
    pub size: usize,
    /// Largest size at which quadratic algorithms run
    pub threshold: usize,
    /// Whether the quadratic algorithms were left out
    pub quadratic_skipped: bool,
    /// RNG seed, when fixed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name ("Unknown" when unavailable)
    pub cpu: String,
    /// Available cores
    pub cpu_cores: u32,
}

/// Timing and comparison figure for one algorithm run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Wall-clock milliseconds of the single run
    pub duration: f64,
    /// Closed-form, instrumented, or the stress-mode sentinel `0`
    pub comparisons: u64,
    /// Element moves, present only when counted live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<u64>,
    /// CPU cycles of the run (0 without a cycle counter)
    #[serde(default)]
    pub cycles: u64,
}

impl AlgorithmResult {
    /// Result carrying a duration and comparison figure
    pub fn new(duration: f64, comparisons: u64) -> Self {
        Self {
            duration,
            comparisons,
            moves: None,
            cycles: 0,
        }
    }

    /// Attach a live move count
    pub fn with_moves(mut self, moves: u64) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Attach the cycle count of the run
    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles = cycles;
        self
    }
}

/// Per-algorithm results keyed by report name (`"QUICK SORT"`, ...).
///
/// Key order is alphabetical only to keep output stable; it carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report name → result
    pub results: BTreeMap<String, AlgorithmResult>,
}

impl BenchmarkReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of `algorithm`, replacing any earlier entry
    pub fn insert(&mut self, algorithm: Algorithm, result: AlgorithmResult) {
        self.results.insert(algorithm.name().to_string(), result);
    }

    /// Result for `algorithm`, if it ran
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        self.results.get(algorithm.name())
    }

    /// Whether `algorithm` has an entry
    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.results.contains_key(algorithm.name())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report has no entries
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Entries ordered fastest first
    pub fn ranked(&self) -> Vec<(&str, &AlgorithmResult)> {
        let mut entries: Vec<_> = self
            .results
            .iter()
            .map(|(name, result)| (name.as_str(), result))
            .collect();
        entries.sort_by(|a, b| a.1.duration.total_cmp(&b.1.duration));
        entries
    }

    /// Fastest entry, if any
    pub fn fastest(&self) -> Option<(&str, &AlgorithmResult)> {
        self.ranked().into_iter().next()
    }
}

impl FromIterator<(Algorithm, AlgorithmResult)> for BenchmarkReport {
    fn from_iter<I: IntoIterator<Item = (Algorithm, AlgorithmResult)>>(iter: I) -> Self {
        let mut report = BenchmarkReport::new();
        for (algorithm, result) in iter {
            report.insert(algorithm, result);
        }
        report
    }
}

/// Output of the single-algorithm `sort` entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOutcome {
    /// Input in ascending order
    pub sorted: Vec<i64>,
    /// Milliseconds
    pub duration: f64,
    /// Input length
    pub size: usize,
    /// Code identifier, e.g. `"BUBBLE_SORT"`
    pub algorithm: String,
}

/// Step-by-step trace of one algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceOutcome {
    /// Code identifier of the traced algorithm
    pub algorithm: String,
    /// Input in ascending order
    pub sorted: Vec<i64>,
    /// Snapshot after every mutation
    pub steps: Vec<Vec<i64>>,
    /// Comparisons performed
    pub comparisons: u64,
    /// Mutation steps, including ones past the snapshot cap
    pub moves: u64,
    /// Whether snapshots were capped
    pub truncated: bool,
}

/// Fixed reference timings per algorithm.
///
/// These figures are illustrative constants, not measurements of any run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Report names, e.g. `"BUBBLE SORT"`
    pub algorithms: Vec<String>,
    /// Milliseconds, parallel to `algorithms`
    pub times: Vec<f64>,
}

impl AnalyticsReport {
    /// Name/time pairs in listing order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.algorithms
            .iter()
            .map(String::as_str)
            .zip(self.times.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchmarkReport {
        [
            (Algorithm::QuickSort, AlgorithmResult::new(0.4, 15)),
            (Algorithm::BubbleSort, AlgorithmResult::new(1.5, 15)),
            (Algorithm::HeapSort, AlgorithmResult::new(0.2, 15)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_keys_use_report_names() {
        let report = sample_report();
        assert_eq!(report.len(), 3);
        assert!(report.results.contains_key("QUICK SORT"));
        assert!(report.contains(Algorithm::BubbleSort));
        assert!(!report.contains(Algorithm::MergeSort));
        assert_eq!(report.get(Algorithm::HeapSort).map(|r| r.comparisons), Some(15));
    }

    #[test]
    fn test_ranked_fastest_first() {
        let report = sample_report();
        let names: Vec<_> = report.ranked().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["HEAP SORT", "QUICK SORT", "BUBBLE SORT"]);
        assert_eq!(report.fastest().map(|(n, _)| n), Some("HEAP SORT"));
        assert!(BenchmarkReport::new().fastest().is_none());
    }

    #[test]
    fn test_moves_omitted_unless_counted() {
        let plain = serde_json::to_value(AlgorithmResult::new(1.0, 10)).unwrap();
        assert!(plain.get("moves").is_none());
        assert_eq!(plain["comparisons"], 10);

        let counted = serde_json::to_value(AlgorithmResult::new(1.0, 10).with_moves(4)).unwrap();
        assert_eq!(counted["moves"], 4);
        assert_eq!(counted["cycles"], 0);
    }

    #[test]
    fn test_cycles_default_when_absent() {
        let result: AlgorithmResult =
            serde_json::from_str(r#"{"duration": 1.0, "comparisons": 3}"#).unwrap();
        assert_eq!(result.cycles, 0);
        assert_eq!(AlgorithmResult::new(1.0, 3).with_cycles(900).cycles, 900);
    }

    #[test]
    fn test_benchmark_report_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json["results"]["BUBBLE SORT"]["duration"].is_number());
    }

    #[test]
    fn test_analytics_entries() {
        let analytics = AnalyticsReport {
            algorithms: vec!["A".to_string(), "B".to_string()],
            times: vec![1.0, 2.0],
        };
        let pairs: Vec<_> = analytics.entries().collect();
        assert_eq!(pairs, vec![("A", 1.0), ("B", 2.0)]);
    }
}
