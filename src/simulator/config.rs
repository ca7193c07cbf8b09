//! Simulation configuration.

use crate::constants::{DEFAULT_MAX_ROUNDS, DEFAULT_NUM_TRIALS, DEFAULT_TRIAL_RETRIES};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent trials to run
    pub num_trials: u32,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Packs a single trial may open before it is cut off as a runaway
    pub max_rounds: u64,

    /// Fresh-seed retries for a trial that hits the round cap
    pub max_retries: u32,

    /// Worker threads (None = all available cores)
    pub workers: Option<usize>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-anomaly detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            max_retries: DEFAULT_TRIAL_RETRIES,
            workers: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast smoke run
    pub fn quick() -> Self {
        Self {
            num_trials: 100,
            ..Default::default()
        }
    }

    /// Reproducible config for tests and regression comparisons
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
