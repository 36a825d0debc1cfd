//! Level curve and the stat-driven percentages derived from it.

use crate::core::constants::{HEALTH_PER_VITALITY, MAX_ADVENTURER_HEALTH, STARTING_HEALTH};

fn integer_sqrt(value: u32) -> u32 {
    let value = value as u64;
    let mut root = (value as f64).sqrt() as u64;
    // Correct float rounding at perfect-square boundaries
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root as u32
}

/// Level for an amount of xp. Shared by adventurers and items.
pub fn calculate_level(xp: u32) -> u32 {
    integer_sqrt(xp).max(1)
}

/// Chance in percent that a stat-based check succeeds at the given xp.
///
/// Used for fleeing (dexterity), dodging obstacles (intelligence) and
/// avoiding ambushes (wisdom).
pub fn ability_based_percentage(xp: u32, stat: u32) -> u32 {
    let level = calculate_level(xp);
    if stat >= level {
        100
    } else {
        stat * 100 / level
    }
}

pub fn max_health(vitality: u32) -> u32 {
    STARTING_HEALTH
        .saturating_add(vitality.saturating_mul(HEALTH_PER_VITALITY))
        .min(MAX_ADVENTURER_HEALTH)
}

/// Adventurer critical hit chance in percent.
pub fn adventurer_critical_chance(luck: u32) -> u32 {
    luck.min(100)
}

/// Beast critical hit chance in percent, driven by the adventurer's level.
pub fn beast_critical_chance(adventurer_xp: u32) -> u32 {
    calculate_level(adventurer_xp).min(100)
}

/// Potion cost in gold at the market.
pub fn potion_price(level: u32, charisma: u32) -> u32 {
    level.saturating_sub(charisma.saturating_mul(2)).max(1)
}
