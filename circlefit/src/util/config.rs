use crate::geometry::DEFAULT_OVERLAP_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Number of differently seeded attempts the optimizer runs
    pub attempts: usize,
    /// Wall-clock budget of a single top-level call, in milliseconds
    pub timeout_ms: u64,
    /// Slack subtracted from the required distance between two circles
    pub overlap_tolerance: f64,
    /// Grid scan step as a fraction of the radius of the circle being placed
    pub grid_step_factor: f64,
    /// Lower bound of the grid scan step
    pub min_grid_step: f64,
    /// Consecutive failures allowed per distinct circle type before an attempt stops
    pub failure_ceiling_per_type: usize,
    /// Lower bound of the consecutive failure ceiling
    pub min_failure_ceiling: usize,
    /// Consecutive failures after which an attempt that has not placed anything gives up.
    /// Disabled if undefined.
    pub empty_failure_limit: Option<usize>,
    /// Upper bound on the length of a generated placement sequence
    pub max_sequence_len: usize,
    /// Base seed of the sequence generator, attempt `i` uses `seed + i`.
    /// If undefined, the base seed is drawn from entropy.
    pub prng_seed: Option<u64>,
}

impl PackConfig {
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_prng_seed(mut self, prng_seed: Option<u64>) -> Self {
        self.prng_seed = prng_seed;
        self
    }

    /// Number of consecutive placement failures after which an attempt stops
    pub fn failure_ceiling(&self, n_distinct_types: usize) -> usize {
        usize::max(
            self.failure_ceiling_per_type * n_distinct_types,
            self.min_failure_ceiling,
        )
    }

    /// Number of consecutive failures tolerated while nothing has been placed yet
    pub fn empty_failure_ceiling(&self, n_distinct_types: usize) -> usize {
        let ceiling = self.failure_ceiling(n_distinct_types);
        match self.empty_failure_limit {
            Some(limit) => usize::min(ceiling, limit),
            None => ceiling,
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            attempts: 15,
            timeout_ms: 20_000,
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            grid_step_factor: 0.1,
            min_grid_step: 0.5,
            failure_ceiling_per_type: 10,
            min_failure_ceiling: 50,
            empty_failure_limit: Some(50),
            max_sequence_len: 5000,
            prng_seed: Some(0),
        }
    }
}
