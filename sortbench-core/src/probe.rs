//! Instrumentation Probes
//!
//! A [`Probe`] observes an algorithm while it runs. Every hand-written sort in
//! [`crate::algorithms`] reports two kinds of events:
//!
//! - `compare`: one comparison between two elements
//! - `moved`: the sequence changed (a swap, a shift, or a merge write-back)
//!
//! [`NoopProbe`] is zero-sized and its callbacks are empty, so the plain
//! entry points (`bubble_sort`, `quick_sort`, ...) compile down to the
//! uninstrumented loops.

use serde::{Deserialize, Serialize};

/// Observer threaded through the instrumented algorithms
pub trait Probe {
    /// Called once per element comparison.
    #[inline(always)]
    fn compare(&mut self) {}

    /// Called after each step that changed `seq`.
    #[inline(always)]
    fn moved(&mut self, seq: &[i64]) {
        let _ = seq;
    }
}

impl<P: Probe + ?Sized> Probe for &mut P {
    #[inline(always)]
    fn compare(&mut self) {
        (**self).compare();
    }

    #[inline(always)]
    fn moved(&mut self, seq: &[i64]) {
        (**self).moved(seq);
    }
}

/// Probe that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProbe;

impl Probe for NoopProbe {}

/// Live comparison and move counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Element comparisons performed
    pub comparisons: u64,
    /// Mutation steps (swaps, shifts, merge writes)
    pub moves: u64,
}

impl Probe for Counters {
    #[inline(always)]
    fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    fn moved(&mut self, _seq: &[i64]) {
        self.moves += 1;
    }
}

/// Records a snapshot of the sequence after every mutation.
///
/// Counts comparisons and moves as well, so one recorder yields a full trace.
/// Snapshots stop once `limit` is reached; counting continues.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    steps: Vec<Vec<i64>>,
    counters: Counters,
    limit: Option<usize>,
    truncated: bool,
}

impl StepRecorder {
    /// Recorder without a snapshot cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder keeping at most `limit` snapshots
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Recorded snapshots, oldest first
    pub fn steps(&self) -> &[Vec<i64>] {
        &self.steps
    }

    /// Comparison and move counts observed so far
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Whether snapshots were dropped because of the cap
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Consume the recorder, returning its snapshots
    pub fn into_steps(self) -> Vec<Vec<i64>> {
        self.steps
    }
}

impl Probe for StepRecorder {
    fn compare(&mut self) {
        self.counters.compare();
    }

    fn moved(&mut self, seq: &[i64]) {
        self.counters.moved(seq);
        match self.limit {
            Some(limit) if self.steps.len() >= limit => self.truncated = true,
            _ => self.steps.push(seq.to_vec()),
        }
    }
}

/// How the comparison figure of a benchmark entry is obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingMode {
    /// Closed-form `n(n-1)/2`, independent of the algorithm
    #[default]
    Formula,
    /// Real per-algorithm counts collected through [`Counters`]
    Instrumented,
}

impl std::str::FromStr for CountingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formula" => Ok(CountingMode::Formula),
            "instrumented" | "live" => Ok(CountingMode::Instrumented),
            other => Err(format!("Unknown counting mode: {}", other)),
        }
    }
}
