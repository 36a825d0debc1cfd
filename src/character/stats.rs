use crate::core::constants::NUM_STATS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Strength,
    Dexterity,
    Vitality,
    Intelligence,
    Wisdom,
    Charisma,
    Luck,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Dexterity,
            StatType::Vitality,
            StatType::Intelligence,
            StatType::Wisdom,
            StatType::Charisma,
            StatType::Luck,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatType::Strength => "STR",
            StatType::Dexterity => "DEX",
            StatType::Vitality => "VIT",
            StatType::Intelligence => "INT",
            StatType::Wisdom => "WIS",
            StatType::Charisma => "CHA",
            StatType::Luck => "LUCK",
        }
    }
}

/// Adventurer stats. Values reported by the chain already include the
/// boosts of equipped items.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub luck: u32,
}

impl Stats {
    pub fn get(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Dexterity => self.dexterity,
            StatType::Vitality => self.vitality,
            StatType::Intelligence => self.intelligence,
            StatType::Wisdom => self.wisdom,
            StatType::Charisma => self.charisma,
            StatType::Luck => self.luck,
        }
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        match stat {
            StatType::Strength => self.strength = value,
            StatType::Dexterity => self.dexterity = value,
            StatType::Vitality => self.vitality = value,
            StatType::Intelligence => self.intelligence = value,
            StatType::Wisdom => self.wisdom = value,
            StatType::Charisma => self.charisma = value,
            StatType::Luck => self.luck = value,
        }
    }

    pub fn total(&self) -> u32 {
        StatType::all().iter().map(|&s| self.get(s)).sum()
    }

    pub fn add(&mut self, other: &Stats) {
        for stat in StatType::all() {
            self.set(stat, self.get(stat).saturating_add(other.get(stat)));
        }
    }

    pub fn subtract(&mut self, other: &Stats) {
        for stat in StatType::all() {
            self.set(stat, self.get(stat).saturating_sub(other.get(stat)));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatChange {
    Increase,
    Decrease,
}

/// Which stats moved between two snapshots, e.g. after an equip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatChanges {
    changes: [Option<StatChange>; NUM_STATS],
}

impl StatChanges {
    pub fn between(previous: &Stats, current: &Stats) -> Self {
        let mut changes = [None; NUM_STATS];
        for (i, stat) in StatType::all().into_iter().enumerate() {
            let (before, after) = (previous.get(stat), current.get(stat));
            changes[i] = match after.cmp(&before) {
                std::cmp::Ordering::Greater => Some(StatChange::Increase),
                std::cmp::Ordering::Less => Some(StatChange::Decrease),
                std::cmp::Ordering::Equal => None,
            };
        }
        Self { changes }
    }

    pub fn get(&self, stat: StatType) -> Option<StatChange> {
        let index = StatType::all().iter().position(|&s| s == stat)?;
        self.changes[index]
    }

    pub fn is_empty(&self) -> bool {
        self.changes.iter().all(Option::is_none)
    }
}

pub fn stat_changes(previous: &Stats, current: &Stats) -> StatChanges {
    StatChanges::between(previous, current)
}
