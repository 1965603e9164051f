//! Benchmark Execution
//!
//! Core execution logic: every algorithm sorts its own clone of the input,
//! timed once through the measurement harness.
//!
//! ## Run Modes
//!
//! - **Compare**: the comparison figure comes from the configured
//!   [`CountingMode`]. `Formula` reports `n(n-1)/2` for every entry;
//!   `Instrumented` counts what each hand-written algorithm actually did and
//!   adds a move count.
//!
//! - **Stress**: no instrumentation, comparison figure fixed at `0`.
//!
//! ## Data Flow
//!
//! ```text
//! input sequence + algorithm list
//!        │
//!        ▼
//!   ExecutionConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │    Executor      │  clone → measure one run → comparison figure
//! └────────┬─────────┘
//!          │
//!          ▼
//!  BenchmarkReport (name → duration, comparisons, moves)
//! ```

use crate::planner::StressPlan;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use sortbench_core::{
    Algorithm, CountingMode, Counters, Result, SortbenchError, StepRecorder, algorithms,
    count_comparisons, measure, measure_millis,
};
use sortbench_report::{AlgorithmResult, BenchmarkReport, SortOutcome, TraceOutcome};

/// Total values a trace may hold across all snapshots (8 MB of `i64`)
pub const TRACE_VALUE_BUDGET: usize = 1_000_000;

/// How the comparison figure of a run is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Counted per [`CountingMode`]
    Compare,
    /// Always the sentinel `0`
    Stress,
}

/// Configuration for benchmark execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Comparison figure source for compare runs
    pub counting: CountingMode,
    /// Distribute the algorithms of one report over the rayon pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub progress: bool,
    /// Snapshot cap for traces (0 = only the value budget applies)
    pub trace_limit: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            counting: CountingMode::Formula,
            parallel: false,
            progress: false,
            trace_limit: 10_000,
        }
    }
}

/// Runs algorithms and collects their results
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Executor running with `config`
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Sort a clone of `input` with `algorithm` and time that single run
    pub fn run_one(
        &self,
        algorithm: Algorithm,
        input: &[i64],
        mode: RunMode,
    ) -> (Algorithm, AlgorithmResult) {
        let (result, _sorted) = self.run_sorted(algorithm, input, mode);
        (algorithm, result)
    }

    /// Like [`Executor::run_one`], also returning the clone the algorithm sorted
    pub fn run_sorted(
        &self,
        algorithm: Algorithm,
        input: &[i64],
        mode: RunMode,
    ) -> (AlgorithmResult, Vec<i64>) {
        let mut seq = input.to_vec();

        let result = match mode {
            RunMode::Compare
                if self.config.counting == CountingMode::Instrumented
                    && algorithm.is_instrumented() =>
            {
                let mut counters = Counters::default();
                let run = measure(|| algorithm.run_with(&mut seq, &mut counters));
                AlgorithmResult::new(run.millis(), counters.comparisons)
                    .with_moves(counters.moves)
                    .with_cycles(run.cycles)
            }
            RunMode::Compare => {
                let run = measure(|| algorithm.run(&mut seq));
                AlgorithmResult::new(run.millis(), count_comparisons(input.len()))
                    .with_cycles(run.cycles)
            }
            RunMode::Stress => {
                let run = measure(|| algorithm.run(&mut seq));
                AlgorithmResult::new(run.millis(), 0).with_cycles(run.cycles)
            }
        };

        debug_assert!(sortbench_core::is_sorted(&seq));
        tracing::debug!(
            algorithm = algorithm.name(),
            size = input.len(),
            duration_ms = result.duration,
            cycles = result.cycles,
            comparisons = result.comparisons,
            "algorithm finished"
        );

        (result, seq)
    }

    /// Run every algorithm in `algorithms` on its own clone of `input`
    pub fn benchmark(
        &self,
        input: &[i64],
        algorithms: &[Algorithm],
        mode: RunMode,
    ) -> BenchmarkReport {
        let pb = self.progress_bar(algorithms.len());

        let results: Vec<(Algorithm, AlgorithmResult)> = if self.config.parallel {
            algorithms
                .par_iter()
                .map(|&algorithm| {
                    let entry = self.run_one(algorithm, input, mode);
                    pb.inc(1);
                    entry
                })
                .collect()
        } else {
            algorithms
                .iter()
                .map(|&algorithm| {
                    pb.set_message(algorithm.name());
                    let entry = self.run_one(algorithm, input, mode);
                    pb.inc(1);
                    entry
                })
                .collect()
        };

        pb.finish_and_clear();
        results.into_iter().collect()
    }

    /// Bubble sort `input` and report the sorted copy
    pub fn sort(&self, input: &[i64]) -> SortOutcome {
        let mut seq = input.to_vec();
        let ((), duration) = measure_millis(|| algorithms::bubble_sort(&mut seq));
        tracing::debug!(size = input.len(), duration_ms = duration, "bubble sort finished");

        SortOutcome {
            sorted: seq,
            duration,
            size: input.len(),
            algorithm: Algorithm::BubbleSort.code().to_string(),
        }
    }

    /// Run the six hand-written algorithms on `input`
    pub fn compare(&self, input: &[i64]) -> BenchmarkReport {
        self.benchmark(input, &Algorithm::REFERENCE, RunMode::Compare)
    }

    /// Run the plan's selection on the plan's sequence
    pub fn stress(&self, plan: &StressPlan) -> BenchmarkReport {
        if plan.quadratic_skipped() {
            tracing::info!(
                size = plan.size,
                threshold = plan.threshold,
                "size above threshold, skipping quadratic algorithms"
            );
        }
        self.benchmark(&plan.sequence, &plan.algorithms, RunMode::Stress)
    }

    /// Record every intermediate state of `algorithm` sorting `input`
    pub fn trace(&self, algorithm: Algorithm, input: &[i64]) -> Result<TraceOutcome> {
        if !algorithm.is_instrumented() {
            return Err(SortbenchError::InvalidInput(format!(
                "{} does not expose intermediate steps",
                algorithm
            )));
        }

        let limit = self.snapshot_limit(input.len());
        let mut recorder = StepRecorder::with_limit(limit);
        let mut seq = input.to_vec();
        algorithm.run_with(&mut seq, &mut recorder);

        let counters = recorder.counters();
        let truncated = recorder.is_truncated();
        if truncated {
            tracing::warn!(algorithm = algorithm.name(), limit, "trace truncated");
        }

        Ok(TraceOutcome {
            algorithm: algorithm.code().to_string(),
            sorted: seq,
            steps: recorder.into_steps(),
            comparisons: counters.comparisons,
            moves: counters.moves,
            truncated,
        })
    }

    /// Snapshots a trace of `len` values may keep: the configured cap,
    /// further bounded by [`TRACE_VALUE_BUDGET`]
    pub fn snapshot_limit(&self, len: usize) -> usize {
        let budget = TRACE_VALUE_BUDGET / len.max(1);
        match self.config.trace_limit {
            0 => budget,
            limit => limit.min(budget),
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{StressConfig, build_stress_plan};

    const SCENARIO: [i64; 6] = [5, 3, 8, 1, 9, 2];

    fn instrumented() -> Executor {
        Executor::new(ExecutionConfig {
            counting: CountingMode::Instrumented,
            ..ExecutionConfig::default()
        })
    }

    #[test]
    fn test_sort_scenario() {
        let outcome = Executor::default().sort(&SCENARIO);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(outcome.size, 6);
        assert_eq!(outcome.algorithm, "BUBBLE_SORT");
        assert!(outcome.duration >= 0.0);
    }

    #[test]
    fn test_sort_empty() {
        let outcome = Executor::default().sort(&[]);
        assert!(outcome.sorted.is_empty());
        assert_eq!(outcome.size, 0);
    }

    #[test]
    fn test_compare_scenario() {
        let report = Executor::default().compare(&SCENARIO);
        assert_eq!(report.len(), 6);
        for algorithm in Algorithm::REFERENCE {
            let result = report.get(algorithm).unwrap();
            assert_eq!(result.comparisons, 15);
            assert_eq!(result.moves, None);
            assert!(result.duration >= 0.0);
        }
        assert!(!report.contains(Algorithm::StdSort));
    }

    #[test]
    fn test_compare_instrumented_counts() {
        let report = instrumented().compare(&SCENARIO);
        let bubble = report.get(Algorithm::BubbleSort).unwrap();
        assert_eq!(bubble.comparisons, 15);
        assert!(bubble.moves.is_some());

        // Insertion sort on sorted input: one comparison per element after the first
        let sorted: Vec<i64> = (0..20).collect();
        let report = instrumented().compare(&sorted);
        let insertion = report.get(Algorithm::InsertionSort).unwrap();
        assert_eq!(insertion.comparisons, 19);
        assert_eq!(insertion.moves, Some(0));
    }

    #[test]
    fn test_instrumented_baseline_falls_back_to_formula() {
        let (_, result) = instrumented().run_one(Algorithm::StdSort, &SCENARIO, RunMode::Compare);
        assert_eq!(result.comparisons, 15);
        assert_eq!(result.moves, None);
    }

    #[test]
    fn test_stress_mode_sentinel() {
        let report = instrumented().benchmark(&SCENARIO, &Algorithm::ALL, RunMode::Stress);
        assert_eq!(report.len(), 8);
        for (_, result) in report.ranked() {
            assert_eq!(result.comparisons, 0);
            assert_eq!(result.moves, None);
        }
    }

    #[test]
    fn test_stress_plan_small_threshold() {
        let plan = build_stress_plan(&StressConfig::new(200).with_threshold(100).with_seed(5))
            .unwrap();
        let report = Executor::default().stress(&plan);
        assert_eq!(report.len(), 5);
        assert!(!report.contains(Algorithm::BubbleSort));
        assert!(report.contains(Algorithm::ParallelSort));
    }

    #[test]
    fn test_parallel_matches_sequential_keys() {
        let sequential = Executor::default().compare(&SCENARIO);
        let parallel = Executor::new(ExecutionConfig {
            parallel: true,
            ..ExecutionConfig::default()
        })
        .compare(&SCENARIO);
        let a: Vec<_> = sequential.results.keys().collect();
        let b: Vec<_> = parallel.results.keys().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_trace_ends_sorted() {
        let outcome = Executor::default()
            .trace(Algorithm::BubbleSort, &SCENARIO)
            .unwrap();
        assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(outcome.steps.last(), Some(&outcome.sorted));
        assert_eq!(outcome.comparisons, 15);
        assert_eq!(outcome.moves as usize, outcome.steps.len());
        assert!(!outcome.truncated);
    }

    #[test]
    fn test_trace_limit() {
        let executor = Executor::new(ExecutionConfig {
            trace_limit: 2,
            ..ExecutionConfig::default()
        });
        let outcome = executor.trace(Algorithm::BubbleSort, &SCENARIO).unwrap();
        assert_eq!(outcome.steps.len(), 2);
        assert!(outcome.truncated);
        assert_eq!(outcome.sorted, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_trace_value_budget() {
        let input: Vec<i64> = (0..2_000).rev().collect();
        let executor = Executor::new(ExecutionConfig {
            trace_limit: 0,
            ..ExecutionConfig::default()
        });
        assert_eq!(executor.snapshot_limit(input.len()), 500);

        let outcome = executor.trace(Algorithm::BubbleSort, &input).unwrap();
        assert_eq!(outcome.steps.len(), 500);
        assert!(outcome.steps.iter().map(Vec::len).sum::<usize>() <= TRACE_VALUE_BUDGET);
        assert!(outcome.truncated);
        assert!(sortbench_core::is_sorted(&outcome.sorted));

        // The smaller of the two caps wins
        assert_eq!(Executor::default().snapshot_limit(6), 10_000);
        assert_eq!(Executor::default().snapshot_limit(1_000), 1_000);
        assert_eq!(executor.snapshot_limit(0), TRACE_VALUE_BUDGET);
    }

    #[test]
    fn test_run_sorted_returns_sorted_clone() {
        let input = vec![9, -4, 7, 7, 0, 3, -4, i64::MAX, i64::MIN];
        let mut expected = input.clone();
        expected.sort();

        for executor in [Executor::default(), instrumented()] {
            for algorithm in Algorithm::ALL {
                for mode in [RunMode::Compare, RunMode::Stress] {
                    let (_, sorted) = executor.run_sorted(algorithm, &input, mode);
                    assert_eq!(sorted, expected, "{} {:?}", algorithm, mode);
                }
            }
        }
    }

    #[test]
    fn test_instrumented_counts_match_fresh_runs() {
        let input = vec![4, 17, -3, 17, 0, 9, 2, -8, 11, 5, 5, 1];
        let parallel = Executor::new(ExecutionConfig {
            counting: CountingMode::Instrumented,
            parallel: true,
            ..ExecutionConfig::default()
        });

        for executor in [instrumented(), parallel] {
            let report = executor.compare(&input);
            for algorithm in Algorithm::REFERENCE {
                let mut seq = input.clone();
                let mut counters = Counters::default();
                algorithm.run_with(&mut seq, &mut counters);

                let result = report.get(algorithm).unwrap();
                assert_eq!(result.comparisons, counters.comparisons, "{}", algorithm);
                assert_eq!(result.moves, Some(counters.moves), "{}", algorithm);
            }
        }
    }

    #[test]
    fn test_cycles_recorded() {
        let input: Vec<i64> = (0..5_000).rev().collect();
        let (_, result) = Executor::default().run_one(Algorithm::HeapSort, &input, RunMode::Stress);
        if sortbench_core::HAS_CYCLE_COUNTER {
            assert!(result.cycles > 0);
        } else {
            assert_eq!(result.cycles, 0);
        }
    }

    #[test]
    fn test_trace_rejects_baselines() {
        let err = Executor::default()
            .trace(Algorithm::ParallelSort, &SCENARIO)
            .unwrap_err();
        assert!(matches!(err, SortbenchError::InvalidInput(_)));
    }
}
