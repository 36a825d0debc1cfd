//! Scores equipment against a beast: crit-weighted damage dealt per attack
//! and damage taken per beast strike.

use super::bag::Bag;
use super::types::{EquipmentSlot, Item};
use crate::beast::Beast;
use crate::character::Adventurer;
use crate::core::combat_math::{beast_damage_by_slot, calculate_attack_damage};
use crate::core::progression::{adventurer_critical_chance, beast_critical_chance};
use serde::Serialize;

/// Expected combat figures for one equipment configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearScore {
    /// Expected damage per adventurer attack.
    pub damage_dealt: f64,
    /// Expected damage per beast strike, averaged over the armor slots.
    pub damage_taken: f64,
    /// Expected damage per beast strike on each slot of `EquipmentSlot::ARMOR`.
    pub slot_damage_taken: [f64; 5],
}

impl GearScore {
    /// Attacks needed to bring `beast_health` to zero at the expected rate.
    pub fn rounds_to_kill(&self, beast_health: u32) -> f64 {
        if self.damage_dealt <= 0.0 {
            return f64::INFINITY;
        }
        (beast_health as f64 / self.damage_dealt).ceil()
    }

    /// Expected damage taken over the whole fight. Lower is better.
    pub fn fight_cost(&self, beast_health: u32) -> f64 {
        self.rounds_to_kill(beast_health) * self.damage_taken
    }
}

/// Score the adventurer's current equipment against the beast.
pub fn score_gear(adventurer: &Adventurer, beast: &Beast) -> GearScore {
    let attack = calculate_attack_damage(adventurer.weapon(), adventurer, beast);
    let damage_dealt = attack.expected(adventurer_critical_chance(adventurer.stats.luck));

    let beast_crit = beast_critical_chance(adventurer.xp);
    let slot_damage_taken = beast_damage_by_slot(beast, adventurer).map(|d| d.expected(beast_crit));
    let damage_taken = slot_damage_taken.iter().sum::<f64>() / slot_damage_taken.len() as f64;

    GearScore {
        damage_dealt,
        damage_taken,
        slot_damage_taken,
    }
}

/// Score of a single item in its own slot, with everything else unchanged.
///
/// Weapons score their expected damage, armor the negated damage taken on
/// that slot, jewelry the change in damage dealt minus damage taken.
pub fn score_item(item: &Item, adventurer: &Adventurer, beast: &Beast) -> f64 {
    let mut equipment = adventurer.equipment.clone();
    let Ok(_) = equipment.equip(*item) else {
        return 0.0;
    };
    let wearer = adventurer.with_equipment(equipment);
    let score = score_gear(&wearer, beast);

    match super::catalog::item_slot(item.id) {
        Some(EquipmentSlot::Weapon) => score.damage_dealt,
        Some(slot) if slot.is_armor() => {
            let index = EquipmentSlot::ARMOR
                .iter()
                .position(|&s| s == slot)
                .unwrap_or_default();
            -score.slot_damage_taken[index]
        }
        _ => score.damage_dealt - score.damage_taken,
    }
}

/// Damage figures shown next to the combat screen, plus the best item for
/// each slot among equipped and bagged items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatStats {
    pub base_damage: u32,
    pub critical_damage: u32,
    pub best_damage: u32,
    pub critical_chance: u32,
    pub damage_taken: f64,
    pub best_damage_taken: f64,
    pub best_items: Vec<Item>,
}

pub fn calculate_combat_stats(adventurer: &Adventurer, bag: &Bag, beast: &Beast) -> CombatStats {
    let current_attack = calculate_attack_damage(adventurer.weapon(), adventurer, beast);
    let current = score_gear(adventurer, beast);

    let mut best_items = Vec::new();
    let mut best_damage = current_attack.base_damage;
    let mut best_slot_taken = current.slot_damage_taken;

    for slot in EquipmentSlot::ALL {
        if slot.is_jewelry() {
            continue;
        }
        let equipped = adventurer.equipment.get(slot);
        let mut best: Option<(Item, f64)> = equipped.map(|item| (*item, score_item(item, adventurer, beast)));

        for item in bag.items_for_slot(slot) {
            let score = score_item(item, adventurer, beast);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((*item, score));
            }
        }

        let Some((item, score)) = best else {
            continue;
        };
        best_items.push(item);
        if slot == EquipmentSlot::Weapon {
            let mut equipment = adventurer.equipment.clone();
            if equipment.equip(item).is_ok() {
                let wearer = adventurer.with_equipment(equipment);
                best_damage = calculate_attack_damage(Some(&item), &wearer, beast).base_damage;
            }
        } else if let Some(index) = EquipmentSlot::ARMOR.iter().position(|&s| s == slot) {
            best_slot_taken[index] = -score;
        }
    }

    CombatStats {
        base_damage: current_attack.base_damage,
        critical_damage: current_attack.critical_damage,
        best_damage,
        critical_chance: adventurer_critical_chance(adventurer.stats.luck),
        damage_taken: current.damage_taken,
        best_damage_taken: best_slot_taken.iter().sum::<f64>() / best_slot_taken.len() as f64,
        best_items,
    }
}
