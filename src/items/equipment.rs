use super::catalog::item_slot;
use super::specials::item_boost;
use super::types::{EquipmentSlot, Item};
use crate::character::stats::Stats;
use crate::error::{CombatError, Result};
use serde::{Deserialize, Serialize};

/// Adventurer equipment slots.
///
/// Slots holding an item with id 0 (the chain's empty marker) deserialize
/// to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    #[serde(deserialize_with = "empty_slot")]
    pub weapon: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub chest: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub head: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub waist: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub foot: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub hand: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub neck: Option<Item>,
    #[serde(deserialize_with = "empty_slot")]
    pub ring: Option<Item>,
}

fn empty_slot<'de, D>(deserializer: D) -> std::result::Result<Option<Item>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let item = Option::<Item>::deserialize(deserializer)?;
    Ok(item.filter(|i| !i.is_empty()))
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Chest => self.chest.as_ref(),
            EquipmentSlot::Head => self.head.as_ref(),
            EquipmentSlot::Waist => self.waist.as_ref(),
            EquipmentSlot::Foot => self.foot.as_ref(),
            EquipmentSlot::Hand => self.hand.as_ref(),
            EquipmentSlot::Neck => self.neck.as_ref(),
            EquipmentSlot::Ring => self.ring.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Waist => &mut self.waist,
            EquipmentSlot::Foot => &mut self.foot,
            EquipmentSlot::Hand => &mut self.hand,
            EquipmentSlot::Neck => &mut self.neck,
            EquipmentSlot::Ring => &mut self.ring,
        }
    }

    /// Put an item in the slot its id belongs to, returning what was there.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>> {
        let slot = item_slot(item.id).ok_or(CombatError::UnknownItem(item.id))?;
        Ok(self.slot_mut(slot).replace(item))
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn contains(&self, id: u8) -> bool {
        self.iter_equipped().any(|(_, item)| item.id == id)
    }

    /// Sum of stat boosts from the specials of every equipped item.
    pub fn stat_boosts(&self, seed: u32) -> Stats {
        let mut total = Stats::default();
        for (_, item) in self.iter_equipped() {
            total.add(&item_boost(item, seed));
        }
        total
    }

    /// Every equipped item must sit in the slot its id belongs to.
    pub fn validate(&self) -> Result<()> {
        for (slot, item) in self.iter_equipped() {
            let expected = item_slot(item.id).ok_or(CombatError::UnknownItem(item.id))?;
            if expected != slot {
                return Err(CombatError::SlotMismatch {
                    id: item.id,
                    expected,
                    found: slot,
                });
            }
        }
        Ok(())
    }
}

/// Items equipped in `current` that were not equipped in `previous`.
///
/// A non-empty result means the adventurer swapped gear mid-fight and the
/// beast gets the next strike.
pub fn new_items_equipped(current: &Equipment, previous: &Equipment) -> Vec<Item> {
    current
        .iter_equipped()
        .filter(|(_, item)| !previous.contains(item.id))
        .map(|(_, item)| *item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
    }

    #[test]
    fn test_equip_uses_catalog_slot() {
        let mut eq = Equipment::new();
        assert_eq!(eq.equip(Item::new(42, 0)).unwrap(), None);
        assert_eq!(eq.equip(Item::new(77, 0)).unwrap(), None);
        assert_eq!(eq.get(EquipmentSlot::Weapon), Some(&Item::new(42, 0)));
        assert_eq!(eq.get(EquipmentSlot::Chest), Some(&Item::new(77, 0)));
    }

    #[test]
    fn test_equip_returns_replaced_item() {
        let mut eq = Equipment::new();
        eq.equip(Item::new(46, 4)).unwrap();
        let previous = eq.equip(Item::new(42, 9)).unwrap();
        assert_eq!(previous, Some(Item::new(46, 4)));
        assert_eq!(eq.iter_equipped().count(), 1);
    }

    #[test]
    fn test_equip_rejects_unknown_id() {
        let mut eq = Equipment::new();
        assert!(matches!(
            eq.equip(Item::new(0, 0)),
            Err(CombatError::UnknownItem(0))
        ));
        assert!(eq.equip(Item::new(200, 0)).is_err());
    }

    #[test]
    fn test_validate_catches_misplaced_item() {
        let eq = Equipment {
            head: Some(Item::new(42, 0)),
            ..Equipment::new()
        };
        assert!(matches!(
            eq.validate(),
            Err(CombatError::SlotMismatch {
                id: 42,
                expected: EquipmentSlot::Weapon,
                found: EquipmentSlot::Head,
            })
        ));
    }

    #[test]
    fn test_zero_id_deserializes_as_empty() {
        let eq: Equipment =
            serde_json::from_str(r#"{"weapon": {"id": 42, "xp": 1}, "chest": {"id": 0, "xp": 0}}"#)
                .unwrap();
        assert!(eq.weapon.is_some());
        assert!(eq.chest.is_none());
        assert!(eq.ring.is_none());
    }

    #[test]
    fn test_new_items_equipped() {
        let mut before = Equipment::new();
        before.equip(Item::new(46, 0)).unwrap();
        before.equip(Item::new(81, 0)).unwrap();

        let mut after = before.clone();
        assert!(new_items_equipped(&after, &before).is_empty());

        after.equip(Item::new(42, 0)).unwrap();
        assert_eq!(new_items_equipped(&after, &before), vec![Item::new(42, 0)]);
    }

    #[test]
    fn test_stat_boosts_sum_equipped_specials() {
        let mut eq = Equipment::new();
        // Level 15 katana with seed 6 rolls "of Power"
        eq.equip(Item::new(42, 225)).unwrap();
        eq.equip(Item::new(81, 0)).unwrap();
        assert_eq!(eq.stat_boosts(6).strength, 3);
        assert_eq!(eq.stat_boosts(6).total(), 3);
    }
}
