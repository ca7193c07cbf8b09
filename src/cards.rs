//! Card categories and the identifier ranges they own.

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// A named partition of the card-id space.
///
/// Ranges across categories are disjoint; the full set is defined once in
/// [`CARD_CATEGORIES`] and never changes after process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    pub first_id: u32,
    pub count: u32,
    pub name: &'static str,
}

impl Category {
    /// Inclusive range of card ids owned by this category.
    pub fn id_range(&self) -> RangeInclusive<u32> {
        self.first_id..=self.first_id + self.count - 1
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Categories serialize as their name, so they can key the results document.
impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

pub const COMMON: Category = Category {
    first_id: 1,
    count: 80,
    name: "common",
};
pub const UNCOMMON: Category = Category {
    first_id: 101,
    count: 100,
    name: "uncommon",
};
pub const RARE: Category = Category {
    first_id: 201,
    count: 60,
    name: "rare",
};
pub const MYTHIC: Category = Category {
    first_id: 301,
    count: 20,
    name: "mythic",
};
pub const BORDERLESS_COMMON: Category = Category {
    first_id: 401,
    count: 2,
    name: "borderless_common",
};
pub const BORDERLESS_UNCOMMON: Category = Category {
    first_id: 501,
    count: 8,
    name: "borderless_uncommon",
};
pub const BORDERLESS_RARE: Category = Category {
    first_id: 601,
    count: 43,
    name: "borderless_rare",
};
pub const BORDERLESS_MYTHIC: Category = Category {
    first_id: 701,
    count: 17,
    name: "borderless_mythic",
};
pub const SPECIAL_GUEST: Category = Category {
    first_id: 801,
    count: 10,
    name: "special_guest",
};
pub const CHARACTER_LAND: Category = Category {
    first_id: 901,
    count: 10,
    name: "character_land",
};
pub const DUAL_LAND: Category = Category {
    first_id: 1001,
    count: 10,
    name: "dual_land",
};
pub const REGULAR_FRAME_LAND: Category = Category {
    first_id: 1101,
    count: 10,
    name: "regular_frame_land",
};

/// Every category of the set, in id order.
pub const CARD_CATEGORIES: [Category; 12] = [
    COMMON,
    UNCOMMON,
    RARE,
    MYTHIC,
    BORDERLESS_COMMON,
    BORDERLESS_UNCOMMON,
    BORDERLESS_RARE,
    BORDERLESS_MYTHIC,
    SPECIAL_GUEST,
    CHARACTER_LAND,
    DUAL_LAND,
    REGULAR_FRAME_LAND,
];
