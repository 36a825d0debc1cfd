//! Item specials: the suffix that grants stat boosts and the two name
//! prefixes that trigger name-match bonuses against beasts.
//!
//! Specials are derived from the item id and the adventurer's item specials
//! seed, so the same item rolls the same specials for the whole game.

use super::catalog::item_slot;
use super::types::Item;
use crate::beast::Beast;
use crate::character::stats::Stats;
use crate::core::constants::{
    NUM_ITEM_SUFFIXES, NUM_NAME_PREFIXES, NUM_NAME_SUFFIXES, PREFIX_UNLOCK_LEVEL,
    SUFFIX_UNLOCK_LEVEL,
};

/// Specials unlocked on an item at its current level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specials {
    /// Item suffix ("of Power"), 1..=16.
    pub suffix: Option<u8>,
    /// First name prefix, compared with a beast's prefix, 1..=69.
    pub name_prefix: Option<u8>,
    /// Second name prefix, compared with a beast's suffix, 1..=18.
    pub name_suffix: Option<u8>,
}

const SUFFIX_NAMES: [&str; NUM_ITEM_SUFFIXES as usize] = [
    "of Power",
    "of Giant",
    "of Titans",
    "of Skill",
    "of Perfection",
    "of Brilliance",
    "of Enlightenment",
    "of Protection",
    "of Anger",
    "of Rage",
    "of Fury",
    "of Vitriol",
    "of the Fox",
    "of Detection",
    "of Reflection",
    "of the Twins",
];

fn roll(item_id: u8, seed: u32, modulus: u32) -> u8 {
    (seed.wrapping_add(item_id as u32) % modulus + 1) as u8
}

pub fn get_specials(item: &Item, seed: u32) -> Specials {
    let Some(slot) = item_slot(item.id) else {
        return Specials::default();
    };
    let level = item.level();
    let mut specials = Specials::default();

    if level >= SUFFIX_UNLOCK_LEVEL {
        specials.suffix = Some(roll(item.id, seed, NUM_ITEM_SUFFIXES));
    }
    if level >= PREFIX_UNLOCK_LEVEL && !slot.is_jewelry() {
        specials.name_prefix = Some(roll(item.id, seed, NUM_NAME_PREFIXES));
        specials.name_suffix = Some(roll(item.id, seed, NUM_NAME_SUFFIXES));
    }
    specials
}

pub fn suffix_name(suffix: u8) -> Option<&'static str> {
    SUFFIX_NAMES.get((suffix as usize).checked_sub(1)?).copied()
}

/// Stat boost granted by a suffix.
pub fn suffix_boost(suffix: u8) -> Stats {
    let (strength, dexterity, vitality, intelligence, wisdom, charisma) = match suffix {
        1 => (3, 0, 0, 0, 0, 0),
        2 => (0, 0, 3, 0, 0, 0),
        3 => (2, 0, 0, 0, 0, 1),
        4 => (0, 3, 0, 0, 0, 0),
        5 => (1, 1, 1, 0, 0, 0),
        6 => (0, 0, 0, 3, 0, 0),
        7 => (0, 0, 0, 0, 3, 0),
        8 => (0, 1, 2, 0, 0, 0),
        9 => (2, 1, 0, 0, 0, 0),
        10 => (1, 0, 0, 0, 1, 1),
        11 => (0, 0, 1, 1, 0, 1),
        12 => (0, 0, 0, 2, 1, 0),
        13 => (0, 2, 0, 0, 0, 1),
        14 => (0, 1, 0, 0, 2, 0),
        15 => (0, 0, 0, 1, 2, 0),
        16 => (0, 0, 0, 0, 0, 3),
        _ => (0, 0, 0, 0, 0, 0),
    };
    Stats {
        strength,
        dexterity,
        vitality,
        intelligence,
        wisdom,
        charisma,
        luck: 0,
    }
}

/// Stat boost the item grants while equipped.
pub fn item_boost(item: &Item, seed: u32) -> Stats {
    get_specials(item, seed)
        .suffix
        .map(suffix_boost)
        .unwrap_or_default()
}

/// Name-match flags of an item against a beast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameMatch {
    pub prefix: bool,
    pub suffix: bool,
}

impl NameMatch {
    pub fn any(&self) -> bool {
        self.prefix || self.suffix
    }
}

pub fn name_match(item: &Item, seed: u32, beast: &Beast) -> NameMatch {
    let specials = get_specials(item, seed);
    NameMatch {
        prefix: specials.name_prefix.is_some() && specials.name_prefix == beast.special_prefix,
        suffix: specials.name_suffix.is_some() && specials.name_suffix == beast.special_suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL_15_XP: u32 = 225;
    const LEVEL_20_XP: u32 = 400;

    #[test]
    fn test_no_specials_below_level_15() {
        let item = Item::new(42, 224);
        assert_eq!(get_specials(&item, 7), Specials::default());
        assert_eq!(item_boost(&item, 7), Stats::default());
    }

    #[test]
    fn test_suffix_unlocks_at_15_prefixes_at_20() {
        let item = Item::new(42, LEVEL_15_XP);
        let specials = get_specials(&item, 0);
        assert!(specials.suffix.is_some());
        assert!(specials.name_prefix.is_none());

        let item = Item::new(42, LEVEL_20_XP);
        let specials = get_specials(&item, 0);
        assert!(specials.name_prefix.is_some());
        assert!(specials.name_suffix.is_some());
    }

    #[test]
    fn test_jewelry_has_no_name_prefixes() {
        let ring = Item::new(8, LEVEL_20_XP);
        let specials = get_specials(&ring, 3);
        assert!(specials.suffix.is_some());
        assert!(specials.name_prefix.is_none());
    }

    #[test]
    fn test_specials_follow_seed() {
        // (seed + id) % modulus + 1
        let item = Item::new(42, LEVEL_20_XP);
        let specials = get_specials(&item, 0);
        assert_eq!(specials.suffix, Some((42 % 16 + 1) as u8));
        assert_eq!(specials.name_prefix, Some((42 % 69 + 1) as u8));
        assert_eq!(specials.name_suffix, Some((42 % 18 + 1) as u8));
    }

    #[test]
    fn test_every_suffix_boosts_three_points() {
        for suffix in 1..=16 {
            assert_eq!(suffix_boost(suffix).total(), 3, "suffix {suffix}");
            assert!(suffix_name(suffix).is_some());
        }
        assert_eq!(suffix_boost(0), Stats::default());
        assert_eq!(suffix_name(0), None);
    }

    #[test]
    fn test_of_power_gives_strength() {
        // 42 + 6 = 48, 48 % 16 = 0 -> suffix 1 ("of Power")
        let item = Item::new(42, LEVEL_15_XP);
        assert_eq!(item_boost(&item, 6).strength, 3);
    }
}
