//! Sorting Algorithms
//!
//! In-place ascending sorts over `i64` sequences. Each hand-written algorithm
//! comes in two forms: a plain entry point (`quick_sort`) and an instrumented
//! one (`quick_sort_with`) that reports comparisons and mutations to a
//! [`Probe`]. The two baselines delegate to the standard library and rayon and
//! report no probe events.
//!
//! | Algorithm | Class     | Stable | Auxiliary space      |
//! |-----------|-----------|--------|----------------------|
//! | bubble    | quadratic | yes    | O(1)                 |
//! | selection | quadratic | no     | O(1)                 |
//! | insertion | quadratic | yes    | O(1)                 |
//! | merge     | log-linear| yes    | O(n) per merge       |
//! | quick     | log-linear| no     | O(log n) stack       |
//! | heap      | log-linear| no     | O(1)                 |

use crate::error::SortbenchError;
use crate::probe::{NoopProbe, Probe};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Quadratic ───────────────────────────────────────────────────────────────

/// Bubble sort: adjacent swaps, each pass one element shorter.
pub fn bubble_sort(seq: &mut [i64]) {
    bubble_sort_with(seq, &mut NoopProbe);
}

/// Instrumented bubble sort. Always performs exactly `n(n-1)/2` comparisons.
pub fn bubble_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    let n = seq.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            probe.compare();
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                probe.moved(seq);
            }
        }
    }
}

/// Selection sort: swap the minimum of the unsorted remainder into place.
pub fn selection_sort(seq: &mut [i64]) {
    selection_sort_with(seq, &mut NoopProbe);
}

/// Instrumented selection sort.
pub fn selection_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            probe.compare();
            if seq[j] < seq[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            seq.swap(i, min_idx);
            probe.moved(seq);
        }
    }
}

/// Insertion sort: shift each element left past its larger predecessors.
pub fn insertion_sort(seq: &mut [i64]) {
    insertion_sort_with(seq, &mut NoopProbe);
}

/// Instrumented insertion sort.
pub fn insertion_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    for i in 1..seq.len() {
        let key = seq[i];
        let mut j = i;
        while j > 0 {
            probe.compare();
            if seq[j - 1] <= key {
                break;
            }
            seq[j] = seq[j - 1];
            probe.moved(seq);
            j -= 1;
        }
        if j != i {
            seq[j] = key;
            probe.moved(seq);
        }
    }
}

// ─── Log-linear ──────────────────────────────────────────────────────────────

/// Top-down merge sort with a temporary buffer per merge.
pub fn merge_sort(seq: &mut [i64]) {
    merge_sort_with(seq, &mut NoopProbe);
}

/// Instrumented merge sort.
pub fn merge_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    let len = seq.len();
    merge_sort_range(seq, 0, len, probe);
}

/// Sort `seq[lo..hi]`. The left half takes the middle element on odd lengths.
fn merge_sort_range<P: Probe + ?Sized>(seq: &mut [i64], lo: usize, hi: usize, probe: &mut P) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo).div_ceil(2);
    merge_sort_range(seq, lo, mid, probe);
    merge_sort_range(seq, mid, hi, probe);
    merge(seq, lo, mid, hi, probe);
}

fn merge<P: Probe + ?Sized>(seq: &mut [i64], lo: usize, mid: usize, hi: usize, probe: &mut P) {
    let mut buffer = Vec::with_capacity(hi - lo);
    let (mut i, mut j) = (lo, mid);

    while i < mid && j < hi {
        probe.compare();
        // `<=` keeps equal elements in input order
        if seq[i] <= seq[j] {
            buffer.push(seq[i]);
            i += 1;
        } else {
            buffer.push(seq[j]);
            j += 1;
        }
    }
    buffer.extend_from_slice(&seq[i..mid]);
    buffer.extend_from_slice(&seq[j..hi]);

    for (offset, value) in buffer.into_iter().enumerate() {
        seq[lo + offset] = value;
        probe.moved(seq);
    }
}

/// Quick sort with the Lomuto partition and the last element as pivot.
///
/// Sorted and reverse-sorted input hit the quadratic worst case.
pub fn quick_sort(seq: &mut [i64]) {
    quick_sort_with(seq, &mut NoopProbe);
}

/// Instrumented quick sort.
///
/// Recurses into the smaller partition and loops over the larger one, so the
/// stack stays logarithmic even when the partitioning degenerates.
pub fn quick_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    let len = seq.len();
    quick_sort_range(seq, 0, len, probe);
}

fn quick_sort_range<P: Probe + ?Sized>(
    seq: &mut [i64],
    mut lo: usize,
    mut hi: usize,
    probe: &mut P,
) {
    while hi - lo > 1 {
        let pivot = partition(seq, lo, hi, probe);
        if pivot - lo < hi - pivot - 1 {
            quick_sort_range(seq, lo, pivot, probe);
            lo = pivot + 1;
        } else {
            quick_sort_range(seq, pivot + 1, hi, probe);
            hi = pivot;
        }
    }
}

/// Partition `seq[lo..hi]` around `seq[hi - 1]`, returning the pivot's final index.
fn partition<P: Probe + ?Sized>(seq: &mut [i64], lo: usize, hi: usize, probe: &mut P) -> usize {
    let last = hi - 1;
    let pivot = seq[last];
    let mut store = lo;
    for j in lo..last {
        probe.compare();
        if seq[j] < pivot {
            seq.swap(store, j);
            probe.moved(seq);
            store += 1;
        }
    }
    seq.swap(store, last);
    probe.moved(seq);
    store
}

/// Heap sort over a max-heap built in place.
pub fn heap_sort(seq: &mut [i64]) {
    heap_sort_with(seq, &mut NoopProbe);
}

/// Instrumented heap sort.
pub fn heap_sort_with<P: Probe + ?Sized>(seq: &mut [i64], probe: &mut P) {
    let n = seq.len();
    for root in (0..n / 2).rev() {
        sift_down(seq, root, n, probe);
    }
    for end in (1..n).rev() {
        seq.swap(0, end);
        probe.moved(seq);
        sift_down(seq, 0, end, probe);
    }
}

fn sift_down<P: Probe + ?Sized>(seq: &mut [i64], mut root: usize, len: usize, probe: &mut P) {
    loop {
        let left = 2 * root + 1;
        if left >= len {
            return;
        }
        let mut largest = root;

        probe.compare();
        if seq[left] > seq[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < len {
            probe.compare();
            if seq[right] > seq[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }
        seq.swap(root, largest);
        probe.moved(seq);
        root = largest;
    }
}

// ─── Baselines ───────────────────────────────────────────────────────────────

/// Standard library unstable sort (pattern-defeating quicksort).
#[inline]
pub fn std_sort(seq: &mut [i64]) {
    seq.sort_unstable();
}

/// Rayon parallel unstable sort. May use every thread of the global pool.
#[inline]
pub fn parallel_sort(seq: &mut [i64]) {
    seq.par_sort_unstable();
}

// ─── Algorithm identifiers ───────────────────────────────────────────────────

/// Growth class used by the stress policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    /// O(n²): bubble, selection, insertion
    Quadratic,
    /// O(n log n) typical: merge, quick, heap
    LogLinear,
    /// Library-provided reference sorts
    Baseline,
}

/// Every algorithm SortBench can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// [`bubble_sort`]
    BubbleSort,
    /// [`selection_sort`]
    SelectionSort,
    /// [`insertion_sort`]
    InsertionSort,
    /// [`merge_sort`]
    MergeSort,
    /// [`quick_sort`]
    QuickSort,
    /// [`heap_sort`]
    HeapSort,
    /// [`std_sort`]
    StdSort,
    /// [`parallel_sort`]
    ParallelSort,
}

impl Algorithm {
    /// All algorithms, quadratic first
    pub const ALL: [Algorithm; 8] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
        Algorithm::StdSort,
        Algorithm::ParallelSort,
    ];

    /// The six hand-written algorithms used by `compare`
    pub const REFERENCE: [Algorithm; 6] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::HeapSort,
    ];

    /// Report key, e.g. `"BUBBLE SORT"`
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "BUBBLE SORT",
            Algorithm::SelectionSort => "SELECTION SORT",
            Algorithm::InsertionSort => "INSERTION SORT",
            Algorithm::MergeSort => "MERGE SORT",
            Algorithm::QuickSort => "QUICK SORT",
            Algorithm::HeapSort => "HEAP SORT",
            Algorithm::StdSort => "STD SORT",
            Algorithm::ParallelSort => "PARALLEL SORT",
        }
    }

    /// Code identifier, e.g. `"BUBBLE_SORT"` (same as the serde form)
    pub fn code(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "BUBBLE_SORT",
            Algorithm::SelectionSort => "SELECTION_SORT",
            Algorithm::InsertionSort => "INSERTION_SORT",
            Algorithm::MergeSort => "MERGE_SORT",
            Algorithm::QuickSort => "QUICK_SORT",
            Algorithm::HeapSort => "HEAP_SORT",
            Algorithm::StdSort => "STD_SORT",
            Algorithm::ParallelSort => "PARALLEL_SORT",
        }
    }

    /// Short command-line key, e.g. `"bubble"`
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble",
            Algorithm::SelectionSort => "selection",
            Algorithm::InsertionSort => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::QuickSort => "quick",
            Algorithm::HeapSort => "heap",
            Algorithm::StdSort => "std",
            Algorithm::ParallelSort => "parallel",
        }
    }

    /// Growth class
    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::BubbleSort | Algorithm::SelectionSort | Algorithm::InsertionSort => {
                Complexity::Quadratic
            }
            Algorithm::MergeSort | Algorithm::QuickSort | Algorithm::HeapSort => {
                Complexity::LogLinear
            }
            Algorithm::StdSort | Algorithm::ParallelSort => Complexity::Baseline,
        }
    }

    /// Whether the algorithm reports probe events (baselines do not)
    pub fn is_instrumented(self) -> bool {
        self.complexity() != Complexity::Baseline
    }

    /// Sort `seq` in place
    pub fn run(self, seq: &mut [i64]) {
        match self {
            Algorithm::BubbleSort => bubble_sort(seq),
            Algorithm::SelectionSort => selection_sort(seq),
            Algorithm::InsertionSort => insertion_sort(seq),
            Algorithm::MergeSort => merge_sort(seq),
            Algorithm::QuickSort => quick_sort(seq),
            Algorithm::HeapSort => heap_sort(seq),
            Algorithm::StdSort => std_sort(seq),
            Algorithm::ParallelSort => parallel_sort(seq),
        }
    }

    /// Sort `seq` in place, reporting events to `probe`
    pub fn run_with<P: Probe + ?Sized>(self, seq: &mut [i64], probe: &mut P) {
        match self {
            Algorithm::BubbleSort => bubble_sort_with(seq, probe),
            Algorithm::SelectionSort => selection_sort_with(seq, probe),
            Algorithm::InsertionSort => insertion_sort_with(seq, probe),
            Algorithm::MergeSort => merge_sort_with(seq, probe),
            Algorithm::QuickSort => quick_sort_with(seq, probe),
            Algorithm::HeapSort => heap_sort_with(seq, probe),
            Algorithm::StdSort => std_sort(seq),
            Algorithm::ParallelSort => parallel_sort(seq),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortbenchError;

    /// Accepts the report name, the code identifier or the short key, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| {
                wanted.eq_ignore_ascii_case(a.name())
                    || wanted.eq_ignore_ascii_case(a.code())
                    || wanted.eq_ignore_ascii_case(a.key())
            })
            .ok_or_else(|| SortbenchError::UnknownAlgorithm(wanted.to_string()))
    }
}
