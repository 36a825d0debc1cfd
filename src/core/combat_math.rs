//! Shared combat math for the simulator, the gear search and the CLI.
//!
//! These pure functions mirror the chain's combat formulas. They never
//! mutate their inputs and return zeroed summaries instead of failing.

use crate::beast::Beast;
use crate::character::Adventurer;
use crate::core::constants::{
    BEAST_MIN_DAMAGE, GOLD_REWARD_DIVISOR, JEWELRY_BONUS_PERCENT_PER_LEVEL, MIN_ATTACK_DAMAGE,
    NAME_PREFIX_MATCH_MULTIPLIER, NAME_SUFFIX_MATCH_MULTIPLIER, STRENGTH_DAMAGE_PERCENT,
    TIER_POWER_BASE,
};
use crate::items::catalog::{
    item_kind, necklace_armor_type, ItemKind, GOLD_RING, PLATINUM_RING, TITANIUM_RING,
};
use crate::items::specials::name_match;
use crate::items::{Effectiveness, EquipmentSlot, Item, ItemType};
use rand::Rng;
use serde::Serialize;

/// Base and critical damage of one hit. Critical is the ceiling value; the
/// caller decides whether the crit lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageSummary {
    pub base_damage: u32,
    pub critical_damage: u32,
}

impl DamageSummary {
    /// Crit-weighted mean damage.
    pub fn expected(&self, crit_chance_percent: u32) -> f64 {
        let p = crit_chance_percent.min(100) as f64 / 100.0;
        self.base_damage as f64 * (1.0 - p) + self.critical_damage as f64 * p
    }

    /// Roll one hit.
    pub fn roll(&self, crit_chance_percent: u32, rng: &mut impl Rng) -> AttackResult {
        let is_crit = roll_crit(crit_chance_percent, rng);
        AttackResult {
            damage: if is_crit {
                self.critical_damage
            } else {
                self.base_damage
            },
            is_crit,
        }
    }
}

/// Result of a rolled hit.
#[derive(Debug, Clone, Copy)]
pub struct AttackResult {
    pub damage: u32,
    pub is_crit: bool,
}

/// Roll for critical hit.
///
/// # Arguments
/// * `crit_chance_percent` - Chance to crit (0-100+)
/// * `rng` - Random number generator
pub fn roll_crit(crit_chance_percent: u32, rng: &mut impl Rng) -> bool {
    let roll = rng.gen_range(0..100);
    roll < crit_chance_percent
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}

/// `level * (6 - tier)`, the base attack or armor value of an item.
pub fn item_power(item: &Item, kind: &ItemKind) -> u32 {
    item.level()
        .saturating_mul(TIER_POWER_BASE.saturating_sub(kind.tier as u32))
}

/// +50% when the attack type is strong against the armor, -50% when weak.
pub fn elemental_adjusted_damage(damage: u32, attack: ItemType, armor: ItemType) -> u32 {
    match attack.effectiveness_against(armor) {
        Effectiveness::Strong => damage + damage / 2,
        Effectiveness::Weak => damage - damage / 2,
        Effectiveness::Fair => damage,
    }
}

/// Jewelry bonus: `JEWELRY_BONUS_PERCENT_PER_LEVEL` percent of `value` per
/// jewelry level.
fn jewelry_bonus(value: u32, jewelry_level: u32) -> u32 {
    let percent = jewelry_level.saturating_mul(JEWELRY_BONUS_PERCENT_PER_LEVEL) as u64;
    (value as u64 * percent / 100) as u32
}

fn name_match_bonus(elemental: u32, item: &Item, seed: u32, beast: &Beast) -> u32 {
    let matched = name_match(item, seed, beast);
    let mut bonus = 0u32;
    if matched.prefix {
        bonus = bonus.saturating_add(elemental.saturating_mul(NAME_PREFIX_MATCH_MULTIPLIER));
    }
    if matched.suffix {
        bonus = bonus.saturating_add(elemental.saturating_mul(NAME_SUFFIX_MATCH_MULTIPLIER));
    }
    bonus
}

/// Damage the adventurer deals to the beast with `weapon`.
///
/// The adventurer supplies strength, the specials seed and ring bonuses,
/// so `weapon` may be a bag item being compared against the equipped one.
/// An empty weapon, a non-weapon item or a defeated beast deal nothing.
pub fn calculate_attack_damage(
    weapon: Option<&Item>,
    adventurer: &Adventurer,
    beast: &Beast,
) -> DamageSummary {
    let Some((weapon, kind)) = weapon
        .and_then(|w| item_kind(w.id).map(|k| (w, k)))
        .filter(|(_, k)| k.slot == EquipmentSlot::Weapon)
    else {
        return DamageSummary::default();
    };
    if beast.is_defeated() {
        return DamageSummary::default();
    }

    let attack = item_power(weapon, kind);
    let elemental = match beast.beast_type() {
        Some(beast_type) => elemental_adjusted_damage(attack, kind.item_type, beast_type.armor_type()),
        None => attack,
    };

    let strength_bonus = elemental
        .saturating_mul(adventurer.stats.strength)
        .saturating_mul(STRENGTH_DAMAGE_PERCENT)
        / 100;

    let mut special_bonus = name_match_bonus(elemental, weapon, adventurer.item_specials_seed, beast);
    if let Some(ring_level) = adventurer.jewelry_level(EquipmentSlot::Ring, PLATINUM_RING) {
        special_bonus = special_bonus.saturating_add(jewelry_bonus(special_bonus, ring_level));
    }

    let mut critical_bonus = elemental;
    if let Some(ring_level) = adventurer.jewelry_level(EquipmentSlot::Ring, TITANIUM_RING) {
        critical_bonus = critical_bonus.saturating_add(jewelry_bonus(critical_bonus, ring_level));
    }

    let beast_armor = beast.power();
    let total = elemental
        .saturating_add(strength_bonus)
        .saturating_add(special_bonus);

    DamageSummary {
        base_damage: total.saturating_sub(beast_armor).max(MIN_ATTACK_DAMAGE),
        critical_damage: total
            .saturating_add(critical_bonus)
            .saturating_sub(beast_armor)
            .max(MIN_ATTACK_DAMAGE),
    }
}

/// Damage a beast deals to an unarmored slot: one and a half times its power.
pub fn empty_slot_damage(beast: &Beast) -> DamageSummary {
    if beast.is_defeated() {
        return DamageSummary::default();
    }
    let elemental = beast.power().saturating_mul(3) / 2;
    DamageSummary {
        base_damage: elemental.max(BEAST_MIN_DAMAGE),
        critical_damage: elemental.saturating_mul(2).max(BEAST_MIN_DAMAGE),
    }
}

/// Damage the beast deals when it strikes the slot protected by `armor`.
///
/// `None`, an empty id or a non-armor item count as an empty slot. The
/// adventurer's equipped necklace amplifies armor of the matching material.
pub fn calculate_beast_damage(
    beast: &Beast,
    adventurer: &Adventurer,
    armor: Option<&Item>,
) -> DamageSummary {
    let Some((armor, kind)) = armor
        .and_then(|a| item_kind(a.id).map(|k| (a, k)))
        .filter(|(_, k)| k.slot.is_armor())
    else {
        return empty_slot_damage(beast);
    };
    if beast.is_defeated() {
        return DamageSummary::default();
    }

    let mut armor_value = item_power(armor, kind);
    if let Some(neck) = adventurer.equipment.get(EquipmentSlot::Neck) {
        if necklace_armor_type(neck.id) == Some(kind.item_type) {
            armor_value = armor_value.saturating_add(jewelry_bonus(armor_value, neck.level()));
        }
    }

    let power = beast.power();
    let elemental = match beast.beast_type() {
        Some(beast_type) => elemental_adjusted_damage(power, beast_type.attack_type(), kind.item_type),
        None => power,
    };
    let special_bonus = name_match_bonus(elemental, armor, adventurer.item_specials_seed, beast);
    let total = elemental.saturating_add(special_bonus);

    DamageSummary {
        base_damage: total.saturating_sub(armor_value).max(BEAST_MIN_DAMAGE),
        critical_damage: total
            .saturating_add(elemental)
            .saturating_sub(armor_value)
            .max(BEAST_MIN_DAMAGE),
    }
}

/// Beast damage against each armor slot, in `EquipmentSlot::ARMOR` order.
pub fn beast_damage_by_slot(beast: &Beast, adventurer: &Adventurer) -> [DamageSummary; 5] {
    EquipmentSlot::ARMOR
        .map(|slot| calculate_beast_damage(beast, adventurer, adventurer.equipment.get(slot)))
}

/// Gold dropped by the beast, boosted by an equipped gold ring.
pub fn calculate_gold_reward(beast: &Beast, ring: Option<&Item>) -> u32 {
    let base = beast.power() / GOLD_REWARD_DIVISOR;
    match ring.filter(|r| r.id == GOLD_RING) {
        Some(ring) => base.saturating_add(jewelry_bonus(base, ring.level())),
        None => base,
    }
}
