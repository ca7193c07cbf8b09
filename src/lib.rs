//! Booster-pack collection simulator.
//!
//! Estimates how many booster packs must be opened to collect every card
//! of every category, by running many randomized pack-opening trials in
//! parallel and aggregating the per-milestone pack counts into mean,
//! median and standard deviation.

pub mod cards;
pub mod constants;
pub mod simulator;
pub mod stacks;
