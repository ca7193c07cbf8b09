//! Booster slot draw rules.
//!
//! A slot ("stack") produces one or more cards per pack opening. Two rule
//! shapes exist: a uniform deal of distinct cards from a single category,
//! and a weighted roll over categories followed by a uniform card pick
//! within the rolled category.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::cards::{self, Category};
use crate::constants::{
    COMMONS_PER_PACK, GUEST_SLOT_ODDS, LAND_SLOT_ODDS, RARE_SLOT_ODDS, UNCOMMONS_PER_PACK,
    WILDCARD_DRAWS_PER_PACK, WILDCARD_SLOT_ODDS,
};

/// Rejected slot configuration, reported before any trial runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("slot deals {count} distinct cards but {category} holds only {available}")]
    DealTooLarge {
        category: Category,
        count: usize,
        available: u32,
    },
    #[error("invalid slot weight table: {0}")]
    BadWeights(#[from] WeightedError),
}

/// Declarative slot description.
///
/// Compiled into a [`Stack`] before the simulation starts; compilation is
/// where configuration errors surface.
#[derive(Debug, Clone)]
pub enum StackSpec {
    /// Deal `count` distinct cards from one category.
    Uniform { category: Category, count: usize },
    /// Roll a category against the odds table `draws` times, picking one
    /// card uniformly from the rolled category each time.
    Weighted {
        odds: Vec<(Category, f64)>,
        draws: usize,
    },
}

impl StackSpec {
    pub fn compile(self) -> Result<Stack, ConfigError> {
        match self {
            StackSpec::Uniform { category, count } => {
                if count as u32 > category.count {
                    return Err(ConfigError::DealTooLarge {
                        category,
                        count,
                        available: category.count,
                    });
                }
                Ok(Stack::Uniform { category, count })
            }
            StackSpec::Weighted { odds, draws } => {
                let table = WeightedIndex::new(odds.iter().map(|(_, w)| *w))?;
                let categories = odds.into_iter().map(|(c, _)| c).collect();
                Ok(Stack::Weighted {
                    categories,
                    table,
                    draws,
                })
            }
        }
    }
}

/// A validated slot, ready to draw.
///
/// Drawing never mutates the slot; all randomness comes from the caller's
/// RNG, so one compiled slot set can be shared across worker threads.
#[derive(Debug, Clone)]
pub enum Stack {
    Uniform {
        category: Category,
        count: usize,
    },
    Weighted {
        categories: Vec<Category>,
        table: WeightedIndex<f64>,
        draws: usize,
    },
}

impl Stack {
    /// Draw this slot once, appending every produced card to `out`.
    pub fn draw(&self, rng: &mut impl Rng, out: &mut Vec<(u32, Category)>) {
        match self {
            Stack::Uniform { category, count } => {
                for idx in index::sample(rng, category.count as usize, *count) {
                    out.push((category.first_id + idx as u32, *category));
                }
            }
            Stack::Weighted {
                categories,
                table,
                draws,
            } => {
                for _ in 0..*draws {
                    let category = categories[table.sample(rng)];
                    out.push((rng.gen_range(category.id_range()), category));
                }
            }
        }
    }

    /// Categories this slot can produce.
    pub fn categories(&self) -> &[Category] {
        match self {
            Stack::Uniform { category, .. } => std::slice::from_ref(category),
            Stack::Weighted { categories, .. } => categories,
        }
    }
}

/// The set of categories collected when opening packs with these slots,
/// in id order.
pub fn collection_universe(slots: &[Stack]) -> Vec<Category> {
    let mut universe = BTreeSet::new();
    for slot in slots {
        universe.extend(slot.categories().iter().copied());
    }
    universe.into_iter().collect()
}

/// The slot layout of one booster pack.
///
/// Every category is reachable from at least one slot with non-zero
/// probability, so a trial completes with probability 1.
pub fn booster_slots() -> Result<Vec<Stack>, ConfigError> {
    [
        StackSpec::Uniform {
            category: cards::COMMON,
            count: COMMONS_PER_PACK,
        },
        StackSpec::Weighted {
            odds: GUEST_SLOT_ODDS.to_vec(),
            draws: 1,
        },
        StackSpec::Uniform {
            category: cards::UNCOMMON,
            count: UNCOMMONS_PER_PACK,
        },
        StackSpec::Weighted {
            odds: RARE_SLOT_ODDS.to_vec(),
            draws: 1,
        },
        StackSpec::Weighted {
            odds: WILDCARD_SLOT_ODDS.to_vec(),
            draws: WILDCARD_DRAWS_PER_PACK,
        },
        StackSpec::Weighted {
            odds: LAND_SLOT_ODDS.to_vec(),
            draws: 1,
        },
    ]
    .into_iter()
    .map(StackSpec::compile)
    .collect()
}
