//! The 101 base loot items, indexed by id.
//!
//! Ids, tiers and materials follow the on-chain loot table so that damage
//! figures line up with what the contracts compute.

use super::types::{EquipmentSlot, ItemType};
use crate::core::constants::NUM_LOOT_ITEMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemKind {
    pub name: &'static str,
    pub tier: u8,
    pub item_type: ItemType,
    pub slot: EquipmentSlot,
}

const fn kind(name: &'static str, tier: u8, item_type: ItemType, slot: EquipmentSlot) -> ItemKind {
    ItemKind {
        name,
        tier,
        item_type,
        slot,
    }
}

use EquipmentSlot::{Chest, Foot, Hand, Head, Neck, Ring, Waist, Weapon};
use ItemType::{Blade, Bludgeon, Cloth, Hide, Magic, Metal, Necklace};

const CATALOG: [ItemKind; NUM_LOOT_ITEMS as usize] = [
    // 1-8: jewelry
    kind("Pendant", 1, Necklace, Neck),
    kind("Necklace", 1, Necklace, Neck),
    kind("Amulet", 1, Necklace, Neck),
    kind("Silver Ring", 1, ItemType::Ring, Ring),
    kind("Bronze Ring", 1, ItemType::Ring, Ring),
    kind("Platinum Ring", 1, ItemType::Ring, Ring),
    kind("Titanium Ring", 1, ItemType::Ring, Ring),
    kind("Gold Ring", 1, ItemType::Ring, Ring),
    // 9-16: magic weapons
    kind("Ghost Wand", 1, Magic, Weapon),
    kind("Grave Wand", 2, Magic, Weapon),
    kind("Bone Wand", 3, Magic, Weapon),
    kind("Wand", 5, Magic, Weapon),
    kind("Grimoire", 1, Magic, Weapon),
    kind("Chronicle", 2, Magic, Weapon),
    kind("Tome", 3, Magic, Weapon),
    kind("Book", 5, Magic, Weapon),
    // 17-41: cloth armor
    kind("Divine Robe", 1, Cloth, Chest),
    kind("Silk Robe", 2, Cloth, Chest),
    kind("Linen Robe", 3, Cloth, Chest),
    kind("Robe", 4, Cloth, Chest),
    kind("Shirt", 5, Cloth, Chest),
    kind("Crown", 1, Cloth, Head),
    kind("Divine Hood", 2, Cloth, Head),
    kind("Silk Hood", 3, Cloth, Head),
    kind("Linen Hood", 4, Cloth, Head),
    kind("Hood", 5, Cloth, Head),
    kind("Brightsilk Sash", 1, Cloth, Waist),
    kind("Silk Sash", 2, Cloth, Waist),
    kind("Wool Sash", 3, Cloth, Waist),
    kind("Linen Sash", 4, Cloth, Waist),
    kind("Sash", 5, Cloth, Waist),
    kind("Divine Slippers", 1, Cloth, Foot),
    kind("Silk Slippers", 2, Cloth, Foot),
    kind("Wool Shoes", 3, Cloth, Foot),
    kind("Linen Shoes", 4, Cloth, Foot),
    kind("Shoes", 5, Cloth, Foot),
    kind("Divine Gloves", 1, Cloth, Hand),
    kind("Silk Gloves", 2, Cloth, Hand),
    kind("Wool Gloves", 3, Cloth, Hand),
    kind("Linen Gloves", 4, Cloth, Hand),
    kind("Gloves", 5, Cloth, Hand),
    // 42-46: blades
    kind("Katana", 1, Blade, Weapon),
    kind("Falchion", 2, Blade, Weapon),
    kind("Scimitar", 3, Blade, Weapon),
    kind("Long Sword", 4, Blade, Weapon),
    kind("Short Sword", 5, Blade, Weapon),
    // 47-71: hide armor
    kind("Demon Husk", 1, Hide, Chest),
    kind("Dragonskin Armor", 2, Hide, Chest),
    kind("Studded Leather Armor", 3, Hide, Chest),
    kind("Hard Leather Armor", 4, Hide, Chest),
    kind("Leather Armor", 5, Hide, Chest),
    kind("Demon Crown", 1, Hide, Head),
    kind("Dragons Crown", 2, Hide, Head),
    kind("War Cap", 3, Hide, Head),
    kind("Leather Cap", 4, Hide, Head),
    kind("Cap", 5, Hide, Head),
    kind("Demonhide Belt", 1, Hide, Waist),
    kind("Dragonskin Belt", 2, Hide, Waist),
    kind("Studded Leather Belt", 3, Hide, Waist),
    kind("Hard Leather Belt", 4, Hide, Waist),
    kind("Leather Belt", 5, Hide, Waist),
    kind("Demonhide Boots", 1, Hide, Foot),
    kind("Dragonskin Boots", 2, Hide, Foot),
    kind("Studded Leather Boots", 3, Hide, Foot),
    kind("Hard Leather Boots", 4, Hide, Foot),
    kind("Leather Boots", 5, Hide, Foot),
    kind("Demons Hands", 1, Hide, Hand),
    kind("Dragonskin Gloves", 2, Hide, Hand),
    kind("Studded Leather Gloves", 3, Hide, Hand),
    kind("Hard Leather Gloves", 4, Hide, Hand),
    kind("Leather Gloves", 5, Hide, Hand),
    // 72-76: bludgeons
    kind("Warhammer", 1, Bludgeon, Weapon),
    kind("Quarterstaff", 2, Bludgeon, Weapon),
    kind("Maul", 3, Bludgeon, Weapon),
    kind("Mace", 4, Bludgeon, Weapon),
    kind("Club", 5, Bludgeon, Weapon),
    // 77-101: metal armor
    kind("Holy Chestplate", 1, Metal, Chest),
    kind("Ornate Chestplate", 2, Metal, Chest),
    kind("Plate Mail", 3, Metal, Chest),
    kind("Chain Mail", 4, Metal, Chest),
    kind("Ring Mail", 5, Metal, Chest),
    kind("Ancient Helm", 1, Metal, Head),
    kind("Ornate Helm", 2, Metal, Head),
    kind("Great Helm", 3, Metal, Head),
    kind("Full Helm", 4, Metal, Head),
    kind("Helm", 5, Metal, Head),
    kind("Ornate Belt", 1, Metal, Waist),
    kind("War Belt", 2, Metal, Waist),
    kind("Plated Belt", 3, Metal, Waist),
    kind("Mesh Belt", 4, Metal, Waist),
    kind("Heavy Belt", 5, Metal, Waist),
    kind("Holy Greaves", 1, Metal, Foot),
    kind("Ornate Greaves", 2, Metal, Foot),
    kind("Greaves", 3, Metal, Foot),
    kind("Chain Boots", 4, Metal, Foot),
    kind("Heavy Boots", 5, Metal, Foot),
    kind("Holy Gauntlets", 1, Metal, Hand),
    kind("Ornate Gauntlets", 2, Metal, Hand),
    kind("Gauntlets", 3, Metal, Hand),
    kind("Chain Gloves", 4, Metal, Hand),
    kind("Heavy Gloves", 5, Metal, Hand),
];

pub const PENDANT: u8 = 1;
pub const NECKLACE: u8 = 2;
pub const AMULET: u8 = 3;
pub const SILVER_RING: u8 = 4;
pub const BRONZE_RING: u8 = 5;
pub const PLATINUM_RING: u8 = 6;
pub const TITANIUM_RING: u8 = 7;
pub const GOLD_RING: u8 = 8;

/// Catalog entry for an item id, `None` for 0 and out-of-range ids.
pub fn item_kind(id: u8) -> Option<&'static ItemKind> {
    if id == 0 {
        return None;
    }
    CATALOG.get(id as usize - 1)
}

pub fn item_slot(id: u8) -> Option<EquipmentSlot> {
    item_kind(id).map(|k| k.slot)
}

pub fn item_tier(id: u8) -> Option<u8> {
    item_kind(id).map(|k| k.tier)
}

pub fn item_type(id: u8) -> Option<ItemType> {
    item_kind(id).map(|k| k.item_type)
}

pub fn item_name(id: u8) -> &'static str {
    item_kind(id).map(|k| k.name).unwrap_or("Empty")
}

/// The armor material a necklace amplifies.
pub fn necklace_armor_type(id: u8) -> Option<ItemType> {
    match id {
        AMULET => Some(Cloth),
        PENDANT => Some(Hide),
        NECKLACE => Some(Metal),
        _ => None,
    }
}
