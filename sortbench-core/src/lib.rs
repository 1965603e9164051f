#![warn(missing_docs)]
//! SortBench Core - Algorithms and Measurement
//!
//! This crate provides the pieces every benchmark run is built from:
//! - Sorting algorithms (bubble, selection, insertion, merge, quick, heap)
//!   plus standard-library and rayon baselines
//! - `Probe` instrumentation for live comparison/move counts and step traces
//! - Single-shot high-precision timing
//! - The closed-form comparison counter and random input generation

pub mod algorithms;
mod error;
mod measure;
mod probe;
mod sequence;

pub use algorithms::{Algorithm, Complexity};
pub use error::{Result, SortbenchError};
/// Whether this platform provides hardware cycle counters (x86_64 RDTSCP or AArch64 CNTVCT_EL0).
pub use measure::HAS_CYCLE_COUNTER;
pub use measure::{Measured, Timer, measure, measure_micros, measure_millis};
pub use probe::{CountingMode, Counters, NoopProbe, Probe, StepRecorder};
pub use sequence::{count_comparisons, is_sorted, random_sequence};

/// Largest stress size at which quadratic algorithms still run (inclusive)
pub const QUADRATIC_THRESHOLD: usize = 50_000;

/// Exclusive upper bound of randomly generated values (lower bound is 0)
pub const VALUE_UPPER_BOUND: i64 = 1_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(QUADRATIC_THRESHOLD, 50_000);
        assert_eq!(VALUE_UPPER_BOUND, 1_000_000);
    }
}
