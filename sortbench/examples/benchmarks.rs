//! SortBench Library Walkthrough
//!
//! Drives the engine from code instead of the command line.
//!
//! Run with:
//!   cargo run --example benchmarks
//!   cargo run --release --example benchmarks -- 200000   # custom stress size

use sortbench::prelude::*;
use sortbench::{Probe, StepRecorder, count_comparisons};

fn main() -> anyhow::Result<()> {
    let size: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 20_000,
    };

    // ========================================================================
    // Compare: formula counts vs instrumented counts
    // ========================================================================

    let input = [5, 3, 8, 1, 9, 2];
    println!("compare {:?} (n(n-1)/2 = {})", input, count_comparisons(input.len()));

    let instrumented = Executor::new(ExecutionConfig {
        counting: CountingMode::Instrumented,
        ..ExecutionConfig::default()
    });
    for (name, result) in instrumented.compare(&input).ranked() {
        println!(
            "  {:<15} {:>10.4} ms  {:>3} comparisons  {:>3} moves",
            name,
            result.duration,
            result.comparisons,
            result.moves.unwrap_or(0)
        );
    }

    // ========================================================================
    // Stress: quadratic algorithms only up to the threshold
    // ========================================================================

    let plan = build_stress_plan(&StressConfig::new(size).with_seed(42))?;
    println!("\nstress {} values ({} algorithms)", plan.size, plan.algorithms.len());
    for (name, result) in Executor::default().stress(&plan).ranked() {
        println!("  {:<15} {:>10.3} ms", name, result.duration);
    }

    // ========================================================================
    // Custom probe: count only
    // ========================================================================

    #[derive(Default)]
    struct CompareOnly(u64);

    impl Probe for CompareOnly {
        fn compare(&mut self) {
            self.0 += 1;
        }
    }

    let mut probe = CompareOnly::default();
    let mut seq = input.to_vec();
    Algorithm::HeapSort.run_with(&mut seq, &mut probe);
    println!("\nheap sort made {} comparisons on {:?}", probe.0, input);

    let mut recorder = StepRecorder::new();
    let mut seq = input.to_vec();
    Algorithm::InsertionSort.run_with(&mut seq, &mut recorder);
    for (i, step) in recorder.steps().iter().enumerate() {
        println!("  step {:>2}: {:?}", i + 1, step);
    }

    Ok(())
}
