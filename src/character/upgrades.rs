//! Pending stat upgrades chosen by the player but not yet confirmed.

use super::adventurer::Adventurer;
use super::stats::{StatType, Stats};
use crate::core::constants::MAX_STAT_VALUE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatSelection {
    selected: Stats,
}

impl StatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &Stats {
        &self.selected
    }

    pub fn total_selected(&self) -> u32 {
        self.selected.total()
    }

    pub fn points_remaining(&self, adventurer: &Adventurer) -> u32 {
        adventurer
            .stat_upgrades_available
            .saturating_sub(self.total_selected())
    }

    /// Highest value a stat may reach: the base cap plus equipment boosts.
    pub fn stat_cap(adventurer: &Adventurer, stat: StatType) -> u32 {
        let boosts = adventurer
            .equipment
            .stat_boosts(adventurer.item_specials_seed);
        MAX_STAT_VALUE + boosts.get(stat)
    }

    /// Select one more point in `stat`. Returns false when no points remain
    /// or the stat is already at its cap.
    pub fn increment(&mut self, adventurer: &Adventurer, stat: StatType) -> bool {
        if self.points_remaining(adventurer) == 0 {
            return false;
        }
        let planned = adventurer.stats.get(stat) + self.selected.get(stat);
        if planned >= Self::stat_cap(adventurer, stat) {
            return false;
        }
        self.selected.set(stat, self.selected.get(stat) + 1);
        true
    }

    pub fn decrement(&mut self, stat: StatType) -> bool {
        let current = self.selected.get(stat);
        if current == 0 {
            return false;
        }
        self.selected.set(stat, current - 1);
        true
    }

    pub fn clear(&mut self) {
        self.selected = Stats::default();
    }
}
