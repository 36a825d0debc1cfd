use crate::core::progression::calculate_level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 8] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Chest,
        EquipmentSlot::Head,
        EquipmentSlot::Waist,
        EquipmentSlot::Foot,
        EquipmentSlot::Hand,
        EquipmentSlot::Neck,
        EquipmentSlot::Ring,
    ];

    /// Slots a beast can strike.
    pub const ARMOR: [EquipmentSlot; 5] = [
        EquipmentSlot::Chest,
        EquipmentSlot::Head,
        EquipmentSlot::Waist,
        EquipmentSlot::Foot,
        EquipmentSlot::Hand,
    ];

    pub fn is_armor(&self) -> bool {
        Self::ARMOR.contains(self)
    }

    pub fn is_jewelry(&self) -> bool {
        matches!(self, EquipmentSlot::Neck | EquipmentSlot::Ring)
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Chest => "Chest",
            EquipmentSlot::Head => "Head",
            EquipmentSlot::Waist => "Waist",
            EquipmentSlot::Foot => "Foot",
            EquipmentSlot::Hand => "Hand",
            EquipmentSlot::Neck => "Neck",
            EquipmentSlot::Ring => "Ring",
        }
    }
}

/// Damage or armor material of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Magic,
    Blade,
    Bludgeon,
    Cloth,
    Hide,
    Metal,
    Necklace,
    Ring,
}

/// Outcome of an attack type meeting an armor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Strong,
    Fair,
    Weak,
}

impl ItemType {
    pub fn effectiveness_against(&self, armor: ItemType) -> Effectiveness {
        match (self, armor) {
            (ItemType::Magic, ItemType::Metal)
            | (ItemType::Blade, ItemType::Cloth)
            | (ItemType::Bludgeon, ItemType::Hide) => Effectiveness::Strong,
            (ItemType::Magic, ItemType::Hide)
            | (ItemType::Blade, ItemType::Metal)
            | (ItemType::Bludgeon, ItemType::Cloth) => Effectiveness::Weak,
            _ => Effectiveness::Fair,
        }
    }
}

/// A loot item instance. The id selects the base item from the catalog,
/// xp determines its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u8,
    #[serde(default)]
    pub xp: u32,
}

impl Item {
    pub fn new(id: u8, xp: u32) -> Self {
        Self { id, xp }
    }

    pub fn level(&self) -> u32 {
        calculate_level(self.xp)
    }

    /// Id 0 is the chain's encoding for an empty slot.
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_slots_exclude_weapon_and_jewelry() {
        assert!(!EquipmentSlot::Weapon.is_armor());
        assert!(!EquipmentSlot::Neck.is_armor());
        assert!(!EquipmentSlot::Ring.is_armor());
        for slot in EquipmentSlot::ARMOR {
            assert!(slot.is_armor());
            assert!(!slot.is_jewelry());
        }
    }

    #[test]
    fn test_effectiveness_triangle() {
        assert_eq!(
            ItemType::Magic.effectiveness_against(ItemType::Metal),
            Effectiveness::Strong
        );
        assert_eq!(
            ItemType::Magic.effectiveness_against(ItemType::Hide),
            Effectiveness::Weak
        );
        assert_eq!(
            ItemType::Magic.effectiveness_against(ItemType::Cloth),
            Effectiveness::Fair
        );
        assert_eq!(
            ItemType::Blade.effectiveness_against(ItemType::Cloth),
            Effectiveness::Strong
        );
        assert_eq!(
            ItemType::Bludgeon.effectiveness_against(ItemType::Cloth),
            Effectiveness::Weak
        );
    }

    #[test]
    fn test_item_level_from_xp() {
        assert_eq!(Item::new(42, 0).level(), 1);
        assert_eq!(Item::new(42, 100).level(), 10);
        assert_eq!(Item::new(42, 224).level(), 14);
        assert_eq!(Item::new(42, 225).level(), 15);
    }

    #[test]
    fn test_slot_serializes_lowercase() {
        let json = serde_json::to_string(&EquipmentSlot::Waist).unwrap();
        assert_eq!(json, "\"waist\"");
    }
}
