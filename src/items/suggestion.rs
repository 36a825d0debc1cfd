//! Gear suggestion: searches equipped and bagged items for a configuration
//! that fights the current beast strictly better than what is worn now.
//!
//! Slots are searched jointly. Suffix stat boosts change strength for every
//! weapon, the necklace changes armor value on every armor slot, and rings
//! change weapon bonuses, so picking the best item per slot in isolation can
//! miss the best combination.

use super::bag::Bag;
use super::equipment::Equipment;
use super::scoring::{score_gear, GearScore};
use super::types::{EquipmentSlot, Item};
use crate::beast::Beast;
use crate::character::Adventurer;
use crate::core::constants::NUM_EQUIPMENT_SLOTS;
use serde::Serialize;

const EPSILON: f64 = 1e-9;

/// An improved configuration. Applying it moves chosen items out of the bag
/// and the items they replace into it. Current health never drops.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSuggestion {
    pub adventurer: Adventurer,
    pub bag: Bag,
    pub changed_slots: Vec<EquipmentSlot>,
}

/// Index into each slot's candidate list. Index 0 is the current item.
type Choice = [usize; NUM_EQUIPMENT_SLOTS];

struct SlotCandidates {
    slot: EquipmentSlot,
    items: Vec<Option<Item>>,
}

struct Evaluated {
    choice: Choice,
    score: GearScore,
    changes: usize,
    health: u32,
}

struct Search<'a> {
    adventurer: &'a Adventurer,
    beast: &'a Beast,
    slots: Vec<SlotCandidates>,
    baseline: GearScore,
}

impl<'a> Search<'a> {
    fn new(adventurer: &'a Adventurer, bag: &Bag, beast: &'a Beast) -> Self {
        let slots = EquipmentSlot::ALL
            .iter()
            .map(|&slot| {
                let mut items = vec![adventurer.equipment.get(slot).copied()];
                items.extend(bag.items_for_slot(slot).copied().map(Some));
                SlotCandidates { slot, items }
            })
            .collect();

        Self {
            adventurer,
            beast,
            slots,
            baseline: score_gear(adventurer, beast),
        }
    }

    fn combinations(&self) -> usize {
        self.slots
            .iter()
            .fold(1usize, |acc, s| acc.saturating_mul(s.items.len()))
    }

    fn equipment_for(&self, choice: &Choice) -> Equipment {
        let mut equipment = self.adventurer.equipment.clone();
        for (candidates, &index) in self.slots.iter().zip(choice.iter()) {
            if index == 0 {
                continue;
            }
            if let Some(item) = candidates.items[index] {
                // Candidates come from `items_for_slot`, so the slot matches
                let _ = equipment.equip(item);
            }
        }
        equipment
    }

    fn evaluate(&self, choice: Choice) -> Evaluated {
        let wearer = self.adventurer.with_equipment(self.equipment_for(&choice));
        Evaluated {
            choice,
            score: score_gear(&wearer, self.beast),
            changes: choice.iter().filter(|&&i| i != 0).count(),
            health: wearer.health,
        }
    }

    /// Pareto check against the current gear. Losing a vitality boost can
    /// clamp current health, which also counts as worse.
    fn is_acceptable(&self, candidate: &Evaluated) -> bool {
        let base = &self.baseline;
        let score = &candidate.score;

        if candidate.changes == 0 || candidate.health < self.adventurer.health {
            return false;
        }
        if score.damage_dealt + EPSILON < base.damage_dealt
            || score.damage_taken > base.damage_taken + EPSILON
        {
            return false;
        }
        let slot_worse = score
            .slot_damage_taken
            .iter()
            .zip(base.slot_damage_taken.iter())
            .any(|(new, old)| *new > *old + EPSILON);
        if slot_worse {
            return false;
        }

        score.damage_dealt > base.damage_dealt + EPSILON
            || score.damage_taken + EPSILON < base.damage_taken
    }

    /// Ranking among acceptable candidates. Ties keep `current`.
    fn is_better(&self, candidate: &Evaluated, current: &Evaluated) -> bool {
        let cost = candidate.score.fight_cost(self.beast.health);
        let current_cost = current.score.fight_cost(self.beast.health);
        if cost + EPSILON < current_cost {
            return true;
        }
        if cost > current_cost + EPSILON {
            return false;
        }
        if candidate.score.damage_dealt > current.score.damage_dealt + EPSILON {
            return true;
        }
        if candidate.score.damage_dealt + EPSILON < current.score.damage_dealt {
            return false;
        }
        candidate.changes < current.changes
    }

    fn consider(&self, candidate: Evaluated, best: &mut Option<Evaluated>) {
        if !self.is_acceptable(&candidate) {
            return;
        }
        let replace = match best {
            Some(current) => self.is_better(&candidate, current),
            None => true,
        };
        if replace {
            *best = Some(candidate);
        }
    }

    /// Every combination in mixed-radix order, current items first.
    fn exhaustive(&self) -> Option<Evaluated> {
        let mut best = None;
        let mut choice: Choice = [0; NUM_EQUIPMENT_SLOTS];

        loop {
            let mut position = 0;
            loop {
                if position == self.slots.len() {
                    return best;
                }
                choice[position] += 1;
                if choice[position] < self.slots[position].items.len() {
                    break;
                }
                choice[position] = 0;
                position += 1;
            }
            self.consider(self.evaluate(choice), &mut best);
        }
    }

    fn into_suggestion(self, best: Evaluated, bag: &Bag) -> Option<GearSuggestion> {
        let mut new_bag = bag.clone();
        let mut changed_slots = Vec::new();

        for (candidates, &index) in self.slots.iter().zip(best.choice.iter()) {
            if index == 0 {
                continue;
            }
            let Some(chosen) = candidates.items[index] else {
                continue;
            };
            if let Err(err) = new_bag.remove(chosen.id) {
                tracing::warn!(%err, "suggested item missing from bag");
                return None;
            }
            if let Some(replaced) = candidates.items[0] {
                if let Err(err) = new_bag.add(replaced) {
                    tracing::warn!(%err, "could not return replaced item to bag");
                    return None;
                }
            }
            changed_slots.push(candidates.slot);
        }

        let equipment = self.equipment_for(&best.choice);
        Some(GearSuggestion {
            adventurer: self.adventurer.with_equipment(equipment),
            bag: new_bag,
            changed_slots,
        })
    }
}

/// Find the equipment that best improves the fight against `beast`.
///
/// Returns `None` when no configuration of equipped and bagged items deals
/// more expected damage or takes less without making either worse.
pub fn suggest_best_combat_gear(
    adventurer: &Adventurer,
    bag: &Bag,
    beast: &Beast,
) -> Option<GearSuggestion> {
    if bag.is_empty() || beast.is_defeated() || !adventurer.is_alive() {
        return None;
    }

    let search = Search::new(adventurer, bag, beast);
    let combinations = search.combinations();
    if combinations <= 1 {
        return None;
    }

    // A full bag spread over eight slots stays in the low thousands
    tracing::debug!(combinations, "exhaustive gear search");
    let best = search.exhaustive()?;

    tracing::debug!(
        dealt = best.score.damage_dealt,
        taken = best.score.damage_taken,
        changes = best.changes,
        "suggested gear"
    );
    search.into_suggestion(best, bag)
}
