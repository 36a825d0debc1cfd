use crate::core::constants::{BEASTS_PER_TYPE, MAX_TIER, NUM_BEASTS, TIER_POWER_BASE};
use crate::error::{CombatError, Result};
use crate::items::ItemType;
use serde::{Deserialize, Serialize};

/// Beast family, determined by the id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeastType {
    Magical,
    Hunter,
    Brute,
}

impl BeastType {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            id if id <= BEASTS_PER_TYPE => Some(BeastType::Magical),
            id if id <= BEASTS_PER_TYPE * 2 => Some(BeastType::Hunter),
            id if id <= NUM_BEASTS => Some(BeastType::Brute),
            _ => None,
        }
    }

    pub fn attack_type(&self) -> ItemType {
        match self {
            BeastType::Magical => ItemType::Magic,
            BeastType::Hunter => ItemType::Blade,
            BeastType::Brute => ItemType::Bludgeon,
        }
    }

    pub fn armor_type(&self) -> ItemType {
        match self {
            BeastType::Magical => ItemType::Cloth,
            BeastType::Hunter => ItemType::Hide,
            BeastType::Brute => ItemType::Metal,
        }
    }
}

/// Read-only snapshot of the beast at the start of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beast {
    pub id: u8,
    pub tier: u8,
    pub level: u32,
    /// Current health.
    pub health: u32,
    #[serde(default)]
    pub special_prefix: Option<u8>,
    #[serde(default)]
    pub special_suffix: Option<u8>,
    #[serde(default)]
    pub seed: u64,
}

impl Beast {
    pub fn new(id: u8, tier: u8, level: u32, health: u32) -> Self {
        Self {
            id,
            tier,
            level,
            health,
            special_prefix: None,
            special_suffix: None,
            seed: 0,
        }
    }

    pub fn with_specials(mut self, prefix: Option<u8>, suffix: Option<u8>) -> Self {
        self.special_prefix = prefix;
        self.special_suffix = suffix;
        self
    }

    pub fn beast_type(&self) -> Option<BeastType> {
        BeastType::from_id(self.id)
    }

    /// `level * (6 - tier)`: both the beast's attack and its armor value.
    pub fn power(&self) -> u32 {
        self.level
            .saturating_mul(TIER_POWER_BASE.saturating_sub(self.tier as u32))
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn validate(&self) -> Result<()> {
        if self.beast_type().is_none() {
            return Err(CombatError::InvalidBeast(format!("unknown id {}", self.id)));
        }
        if !(1..=MAX_TIER).contains(&self.tier) {
            return Err(CombatError::InvalidBeast(format!(
                "tier {} outside 1-{MAX_TIER}",
                self.tier
            )));
        }
        if self.level == 0 {
            return Err(CombatError::InvalidBeast("level must be at least 1".to_string()));
        }
        Ok(())
    }
}
