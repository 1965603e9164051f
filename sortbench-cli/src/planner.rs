//! Stress Planner
//!
//! Builds the execution plan for a stress run: one random input sequence and
//! the subset of algorithms allowed to sort it.
//!
//! Gating rule:
//! - Quadratic algorithms (bubble, selection, insertion) only when `size <= threshold`
//! - Log-linear (merge, quick, heap) and baseline (std, parallel) algorithms always
//!
//! Quadratic sorts on large inputs would keep a run busy for minutes, so the
//! threshold is the only backpressure the core applies. Any absolute ceiling
//! is the caller's `max_size`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sortbench_core::{
    Algorithm, Complexity, QUADRATIC_THRESHOLD, Result, SortbenchError, VALUE_UPPER_BOUND,
    random_sequence,
};

/// Parameters of one stress request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressConfig {
    /// Requested sequence length (must be positive)
    pub size: usize,
    /// Largest size at which quadratic algorithms run
    pub threshold: usize,
    /// Exclusive upper bound of generated values
    pub value_upper_bound: i64,
    /// Optional absolute ceiling on `size`
    pub max_size: Option<usize>,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl StressConfig {
    /// Stress request of `size` elements with the default policy
    pub fn new(size: usize) -> Self {
        Self {
            size,
            threshold: QUADRATIC_THRESHOLD,
            value_upper_bound: VALUE_UPPER_BOUND,
            max_size: None,
            seed: None,
        }
    }

    /// Override the quadratic threshold
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject sizes above `max_size`
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Check the request before any allocation happens
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SortbenchError::InvalidInput(
                "stress size must be positive".to_string(),
            ));
        }
        if self.value_upper_bound <= 0 {
            return Err(SortbenchError::InvalidInput(format!(
                "value upper bound must be positive, got {}",
                self.value_upper_bound
            )));
        }
        if let Some(max) = self.max_size {
            if self.size > max {
                return Err(SortbenchError::SizeLimitExceeded {
                    size: self.size,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Whether quadratic algorithms take part at this size
    pub fn runs_quadratic(&self) -> bool {
        self.size <= self.threshold
    }
}

/// Execution plan for one stress run
#[derive(Debug, Clone)]
pub struct StressPlan {
    /// Shared input; every algorithm sorts its own clone
    pub sequence: Vec<i64>,
    /// Algorithms selected by the gating rule
    pub algorithms: Vec<Algorithm>,
    /// Requested size
    pub size: usize,
    /// Threshold the selection was made with
    pub threshold: usize,
    /// Seed used for the input, when fixed
    pub seed: Option<u64>,
}

impl StressPlan {
    /// Whether the quadratic algorithms were left out
    pub fn quadratic_skipped(&self) -> bool {
        !self
            .algorithms
            .iter()
            .any(|a| a.complexity() == Complexity::Quadratic)
    }
}

/// Algorithms allowed to run on a sequence of `size` elements
pub fn select_algorithms(size: usize, threshold: usize) -> Vec<Algorithm> {
    Algorithm::ALL
        .into_iter()
        .filter(|a| a.complexity() != Complexity::Quadratic || size <= threshold)
        .collect()
}

/// Build a stress plan, seeding the generator from `config.seed` or entropy
pub fn build_stress_plan(config: &StressConfig) -> Result<StressPlan> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    build_stress_plan_with_rng(config, &mut rng)
}

/// Build a stress plan drawing values from `rng`
pub fn build_stress_plan_with_rng<R: rand::Rng + ?Sized>(
    config: &StressConfig,
    rng: &mut R,
) -> Result<StressPlan> {
    config.validate()?;

    Ok(StressPlan {
        sequence: random_sequence(rng, config.size, config.value_upper_bound),
        algorithms: select_algorithms(config.size, config.threshold),
        size: config.size,
        threshold: config.threshold,
        seed: config.seed,
    })
}
