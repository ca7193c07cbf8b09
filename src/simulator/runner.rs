//! Parallel trial runner.
//!
//! Trials are fully independent, so they fan out across a rayon worker
//! pool. Each trial owns a ChaCha8 stream derived from the config seed
//! and the trial index; nothing is shared between workers, so seeded runs
//! stay reproducible regardless of scheduling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::config::SimConfig;
use super::report::SimReport;
use super::trial::{run_trial, MilestoneMap, TrialOutcome};
use crate::stacks::Stack;

/// Run the full simulation and aggregate the results into a report.
pub fn run_simulation(slots: &[Stack], config: &SimConfig) -> SimReport {
    let maps = run_trials(slots, config);
    SimReport::from_trials(config.num_trials, maps)
}

/// Run `config.num_trials` independent trials and collect their milestone
/// maps. Cross-trial ordering carries no meaning.
pub fn run_trials(slots: &[Stack], config: &SimConfig) -> Vec<MilestoneMap> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers.unwrap_or(0))
        .build()
        .expect("failed to build worker pool");

    pool.install(|| {
        (0..config.num_trials)
            .into_par_iter()
            .filter_map(|trial_idx| run_trial_with_retries(slots, config, trial_idx))
            .collect()
    })
}

/// Run one trial, reseeding after each round-cap anomaly. Returns None
/// once the trial is abandoned; sibling trials are unaffected.
fn run_trial_with_retries(
    slots: &[Stack],
    config: &SimConfig,
    trial_idx: u32,
) -> Option<MilestoneMap> {
    for attempt in 0..=config.max_retries {
        let mut rng = trial_rng(config.seed, trial_idx, attempt);
        match run_trial(slots, config.max_rounds, &mut rng) {
            TrialOutcome::Completed(map) => return Some(map),
            TrialOutcome::CapExceeded => {
                if config.verbosity >= 2 {
                    eprintln!(
                        "trial {trial_idx} hit the {} round cap on attempt {}, reseeding",
                        config.max_rounds,
                        attempt + 1
                    );
                }
            }
        }
    }

    if config.verbosity >= 1 {
        eprintln!(
            "trial {trial_idx} abandoned after {} attempts at the round cap",
            config.max_retries + 1
        );
    }
    None
}

/// Derive an independent stream for one trial attempt. Seeded runs are
/// reproducible; unseeded runs draw from OS entropy.
fn trial_rng(seed: Option<u64>, trial_idx: u32, attempt: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(
            seed.wrapping_add(trial_idx as u64)
                .wrapping_add((attempt as u64) << 32),
        ),
        None => ChaCha8Rng::from_entropy(),
    }
}
