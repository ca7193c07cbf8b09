//! Single-trial simulation: open packs until every collection milestone
//! is reached.

use rand::Rng;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::cards::Category;
use crate::stacks::{collection_universe, Stack};

/// For every category under collection, the first round at which each
/// cumulative distinct-card count (1..=category size) was reached.
///
/// A recorded round is never overwritten: first time reached wins. One
/// map is allocated per trial and frozen when the trial ends.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneMap {
    rounds: BTreeMap<Category, BTreeMap<u32, u64>>,
}

impl MilestoneMap {
    pub(crate) fn new(universe: &[Category]) -> Self {
        Self {
            rounds: universe.iter().map(|&c| (c, BTreeMap::new())).collect(),
        }
    }

    /// Round at which `category` first held `target` distinct cards.
    pub fn round_for(&self, category: Category, target: u32) -> Option<u64> {
        self.rounds
            .get(&category)
            .and_then(|targets| targets.get(&target))
            .copied()
    }

    /// Categories tracked by this trial, in id order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rounds.keys().copied()
    }

    /// Record `round` as the milestone for `target` unless one is already
    /// recorded.
    pub(crate) fn record(&mut self, category: Category, target: u32, round: u64) {
        self.rounds
            .entry(category)
            .or_default()
            .entry(target)
            .or_insert(round);
    }

    fn is_complete(&self) -> bool {
        self.rounds
            .iter()
            .all(|(category, targets)| targets.len() as u32 == category.count)
    }
}

/// Distinct cards seen so far in one trial, plus the pack counter.
/// Owned by exactly one trial execution; never shared.
struct TrialState {
    seen: HashMap<Category, HashSet<u32>>,
    round: u64,
}

impl TrialState {
    fn new(universe: &[Category]) -> Self {
        Self {
            seen: universe.iter().map(|&c| (c, HashSet::new())).collect(),
            round: 0,
        }
    }

    fn add(&mut self, id: u32, category: Category) {
        self.seen.entry(category).or_default().insert(id);
    }

    fn distinct(&self, category: Category) -> u32 {
        self.seen.get(&category).map_or(0, |ids| ids.len() as u32)
    }
}

/// Outcome of one trial.
#[derive(Debug, Clone)]
pub enum TrialOutcome {
    /// Every milestone of every collected category was reached.
    Completed(MilestoneMap),
    /// The round cap passed first; the trial was cut off.
    CapExceeded,
}

/// Open packs until every category fed by `slots` has reached every
/// cumulative-count milestone, or until `max_rounds` packs have been
/// opened.
///
/// Each round draws every slot exactly once, in order, then records newly
/// reached milestones. Distinct counts never decrease, so later
/// milestones can only complete after earlier ones and the per-round scan
/// stays correct.
pub fn run_trial(slots: &[Stack], max_rounds: u64, rng: &mut impl Rng) -> TrialOutcome {
    let universe = collection_universe(slots);
    let mut state = TrialState::new(&universe);
    let mut milestones = MilestoneMap::new(&universe);
    let mut drawn: Vec<(u32, Category)> = Vec::with_capacity(16);

    while state.round < max_rounds {
        drawn.clear();
        for slot in slots {
            slot.draw(rng, &mut drawn);
        }
        for &(id, category) in &drawn {
            state.add(id, category);
        }
        state.round += 1;

        for &category in &universe {
            for target in 1..=state.distinct(category) {
                milestones.record(category, target, state.round);
            }
        }
        if milestones.is_complete() {
            return TrialOutcome::Completed(milestones);
        }
    }

    TrialOutcome::CapExceeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards;
    use crate::stacks::{booster_slots, StackSpec};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_milestone_first_record_wins() {
        let mut map = MilestoneMap::new(&[cards::COMMON]);
        map.record(cards::COMMON, 1, 5);
        map.record(cards::COMMON, 1, 9);
        assert_eq!(map.round_for(cards::COMMON, 1), Some(5));
    }

    #[test]
    fn test_booster_trial_completes_with_full_sets() {
        let slots = booster_slots().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let TrialOutcome::Completed(map) = run_trial(&slots, 100_000, &mut rng) else {
            panic!("booster trial should complete well before 100k packs");
        };

        for category in cards::CARD_CATEGORIES {
            for target in 1..=category.count {
                assert!(
                    map.round_for(category, target).is_some(),
                    "{} target {target} never recorded",
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_milestone_rounds_are_monotone() {
        let slots = booster_slots().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4242);

        let TrialOutcome::Completed(map) = run_trial(&slots, 100_000, &mut rng) else {
            panic!("booster trial should complete");
        };

        for category in cards::CARD_CATEGORIES {
            for target in 1..category.count {
                let earlier = map.round_for(category, target).unwrap();
                let later = map.round_for(category, target + 1).unwrap();
                assert!(
                    earlier <= later,
                    "{}: target {} at round {} after target {} at round {}",
                    category.name,
                    target,
                    earlier,
                    target + 1,
                    later
                );
            }
        }
    }

    #[test]
    fn test_round_cap_stops_unreachable_category() {
        // Mythic is in the universe but can never be rolled.
        let slots = vec![StackSpec::Weighted {
            odds: vec![(cards::RARE, 1.0), (cards::MYTHIC, 0.0)],
            draws: 1,
        }
        .compile()
        .unwrap()];
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(matches!(
            run_trial(&slots, 500, &mut rng),
            TrialOutcome::CapExceeded
        ));
    }
}
