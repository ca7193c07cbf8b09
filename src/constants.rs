//! Slot odds and simulator defaults.

use crate::cards::{self, Category};

// Per-pack deal sizes
pub const COMMONS_PER_PACK: usize = 6;
pub const UNCOMMONS_PER_PACK: usize = 3;
pub const WILDCARD_DRAWS_PER_PACK: usize = 2;

// Odds tables for the weighted slots. Consumed as-is by the draw
// machinery; they are not renormalized.
pub const GUEST_SLOT_ODDS: &[(Category, f64)] = &[
    (cards::COMMON, 0.985),
    (cards::SPECIAL_GUEST, 0.015),
];

pub const RARE_SLOT_ODDS: &[(Category, f64)] = &[
    (cards::RARE, 0.78),
    (cards::MYTHIC, 0.128),
    (cards::BORDERLESS_RARE, 0.077),
    (cards::BORDERLESS_MYTHIC, 0.015),
];

pub const WILDCARD_SLOT_ODDS: &[(Category, f64)] = &[
    (cards::COMMON, 0.167),
    (cards::UNCOMMON, 0.583),
    (cards::RARE, 0.163),
    (cards::MYTHIC, 0.026),
    (cards::BORDERLESS_RARE, 0.016),
    (cards::BORDERLESS_MYTHIC, 0.003),
    (cards::BORDERLESS_COMMON, 0.018),
    (cards::BORDERLESS_UNCOMMON, 0.024),
];

pub const LAND_SLOT_ODDS: &[(Category, f64)] = &[
    (cards::CHARACTER_LAND, 0.25),
    (cards::DUAL_LAND, 0.50),
    (cards::REGULAR_FRAME_LAND, 0.25),
];

// Simulator defaults
pub const DEFAULT_NUM_TRIALS: u32 = 10_000;
// The slowest category (borderless mythic, ~2% of draws over 17 cards)
// averages ~2,800 packs to complete; the cap only has to stop a trial
// that cannot finish at all.
pub const DEFAULT_MAX_ROUNDS: u64 = 20_000;
pub const DEFAULT_TRIAL_RETRIES: u32 = 3;
