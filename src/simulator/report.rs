//! Aggregation of trial results into summary statistics.

use serde::Serialize;
use std::collections::BTreeMap;

use super::trial::MilestoneMap;
use crate::cards::Category;

/// Mean, median and population standard deviation of the packs needed to
/// reach one collection target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetStats {
    pub average: f64,
    pub median: f64,
    pub deviation: f64,
}

/// category -> target count -> stats; the document the chart renderer
/// reads. Targets serialize under their numeric value, in order.
pub type AggregateResult = BTreeMap<Category, BTreeMap<u32, TargetStats>>;

/// Aggregated results from all trials of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub trials_requested: u32,
    pub trials_completed: u32,
    pub trials_abandoned: u32,
    pub results: AggregateResult,
}

impl SimReport {
    /// Aggregate the milestone maps of all completed trials.
    ///
    /// Every completed trial covers the same milestone space by
    /// construction; a missing entry means the simulator itself is broken
    /// and aggregation panics rather than skewing the statistics.
    pub fn from_trials(trials_requested: u32, maps: Vec<MilestoneMap>) -> Self {
        let trials_completed = maps.len() as u32;
        let mut results = AggregateResult::new();

        if let Some(first) = maps.first() {
            for category in first.categories().collect::<Vec<_>>() {
                let mut per_target = BTreeMap::new();
                for target in 1..=category.count {
                    let rounds: Vec<f64> = maps
                        .iter()
                        .map(|map| {
                            map.round_for(category, target).unwrap_or_else(|| {
                                panic!(
                                    "milestone for {category} target {target} missing from a \
                                     completed trial"
                                )
                            }) as f64
                        })
                        .collect();
                    per_target.insert(
                        target,
                        TargetStats {
                            average: mean(&rounds),
                            median: median(&rounds),
                            deviation: std_deviation(&rounds),
                        },
                    );
                }
                results.insert(category, per_target);
            }
        }

        Self {
            trials_requested,
            trials_completed,
            trials_abandoned: trials_requested.saturating_sub(trials_completed),
            results,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════════════════\n");
        out.push_str("                 BOOSTER COLLECTION REPORT\n");
        out.push_str("═══════════════════════════════════════════════════════════════\n\n");

        out.push_str(&format!(
            "Trials: {} requested, {} completed, {} abandoned\n\n",
            self.trials_requested, self.trials_completed, self.trials_abandoned
        ));

        out.push_str("── PACKS TO COMPLETE EACH SET ───────────────────────────────────\n");
        out.push_str("  Category               Cards       Avg    Median    StdDev\n");
        for (category, targets) in &self.results {
            if let Some(stats) = targets.get(&category.count) {
                out.push_str(&format!(
                    "  {:<22} {:>5} {:>9.1} {:>9.1} {:>9.2}\n",
                    category.name, category.count, stats.average, stats.median, stats.deviation
                ));
            }
        }
        out.push_str("═══════════════════════════════════════════════════════════════\n");

        out
    }

    /// Serialize only the per-category statistics document consumed by
    /// the chart renderer.
    pub fn results_to_json(&self) -> String {
        serde_json::to_string_pretty(&self.results).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize the full report, trial counts included.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted list; mean of the two central values for
/// even counts.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let len = sorted.len();
    if len % 2 == 0 {
        (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    } else {
        sorted[len / 2]
    }
}

/// Population standard deviation (divisor n, not n-1).
fn std_deviation(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards;

    fn map_with_rounds(category: Category, rounds: &[u64]) -> MilestoneMap {
        let mut map = MilestoneMap::new(&[category]);
        for (i, &round) in rounds.iter().enumerate() {
            map.record(category, i as u32 + 1, round);
        }
        map
    }

    #[test]
    fn test_median_of_odd_and_even_counts() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_deviation_uses_population_divisor() {
        // Mean 3, squared deviations 1 and 1, variance 2/2 = 1
        assert!((std_deviation(&[2.0, 4.0]) - 1.0).abs() < f64::EPSILON);
        assert_eq!(std_deviation(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_from_trials_aggregates_per_target() {
        let maps = vec![
            map_with_rounds(cards::BORDERLESS_COMMON, &[1, 4]),
            map_with_rounds(cards::BORDERLESS_COMMON, &[2, 6]),
            map_with_rounds(cards::BORDERLESS_COMMON, &[3, 8]),
        ];

        let report = SimReport::from_trials(3, maps);
        assert_eq!(report.trials_completed, 3);
        assert_eq!(report.trials_abandoned, 0);

        let stats = report.results[&cards::BORDERLESS_COMMON][&2];
        assert!((stats.average - 6.0).abs() < f64::EPSILON);
        assert!((stats.median - 6.0).abs() < f64::EPSILON);
        // Rounds 4, 6, 8: population deviation is sqrt(8/3)
        assert!((stats.deviation - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "missing from a completed trial")]
    fn test_mismatched_milestone_space_panics() {
        let full = map_with_rounds(cards::BORDERLESS_COMMON, &[1, 2]);
        let partial = map_with_rounds(cards::BORDERLESS_COMMON, &[1]);
        SimReport::from_trials(2, vec![full, partial]);
    }

    #[test]
    fn test_results_json_keys_are_category_names() {
        let maps = vec![map_with_rounds(cards::BORDERLESS_COMMON, &[1, 2])];
        let report = SimReport::from_trials(1, maps);
        let json = report.results_to_json();
        assert!(json.contains("\"borderless_common\""));
        assert!(json.contains("\"average\""));
        assert!(json.contains("\"median\""));
        assert!(json.contains("\"deviation\""));
    }
}
