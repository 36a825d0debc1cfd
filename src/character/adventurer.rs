use super::stats::Stats;
use crate::core::progression::{calculate_level, max_health};
use crate::items::{EquipmentSlot, Equipment, Item};
use serde::{Deserialize, Serialize};

/// Snapshot of the player's character as reported by the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adventurer {
    pub health: u32,
    pub xp: u32,
    pub gold: u32,
    pub stats: Stats,
    pub equipment: Equipment,
    pub item_specials_seed: u32,
    pub action_count: u32,
    pub stat_upgrades_available: u32,
}

impl Adventurer {
    pub fn level(&self) -> u32 {
        calculate_level(self.xp)
    }

    pub fn max_health(&self) -> u32 {
        max_health(self.stats.vitality)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn weapon(&self) -> Option<&Item> {
        self.equipment.get(EquipmentSlot::Weapon)
    }

    /// Level of the equipped jewelry with the given id, if worn.
    pub fn jewelry_level(&self, slot: EquipmentSlot, id: u8) -> Option<u32> {
        self.equipment
            .get(slot)
            .filter(|item| item.id == id)
            .map(Item::level)
    }

    /// Stats the adventurer would have wearing `equipment` instead of the
    /// current gear. Luck is left alone because it counts bagged jewelry too.
    pub fn stats_with_equipment(&self, equipment: &Equipment) -> Stats {
        let mut current = self.equipment.stat_boosts(self.item_specials_seed);
        let mut candidate = equipment.stat_boosts(self.item_specials_seed);
        current.luck = 0;
        candidate.luck = 0;

        let mut stats = self.stats;
        stats.subtract(&current);
        stats.add(&candidate);
        stats
    }

    /// The same adventurer wearing `equipment`, stats adjusted and health
    /// clamped to the resulting maximum.
    pub fn with_equipment(&self, equipment: Equipment) -> Adventurer {
        let stats = self.stats_with_equipment(&equipment);
        let mut adventurer = Adventurer {
            stats,
            equipment,
            ..self.clone()
        };
        adventurer.health = adventurer.health.min(adventurer.max_health());
        adventurer
    }
}
