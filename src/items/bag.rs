use super::catalog::item_slot;
use super::types::{EquipmentSlot, Item};
use crate::core::constants::BAG_CAPACITY;
use crate::error::{CombatError, Result};
use serde::{Deserialize, Serialize};

/// Unequipped items. Order only matters for display.
///
/// Serialized as a plain list; deserializing enforces the capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Bag {
    items: Vec<Item>,
}

impl TryFrom<Vec<Item>> for Bag {
    type Error = CombatError;

    fn try_from(items: Vec<Item>) -> Result<Self> {
        Self::from_items(items)
    }
}

impl From<Bag> for Vec<Item> {
    fn from(bag: Bag) -> Self {
        bag.items
    }
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        if items.len() > BAG_CAPACITY {
            return Err(CombatError::BagFull {
                capacity: BAG_CAPACITY,
            });
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u8) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn add(&mut self, item: Item) -> Result<()> {
        if self.items.len() >= BAG_CAPACITY {
            return Err(CombatError::BagFull {
                capacity: BAG_CAPACITY,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Take an item out of the bag by id.
    pub fn remove(&mut self, id: u8) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CombatError::NotInBag(id))?;
        Ok(self.items.remove(index))
    }

    /// Items that fit the given equipment slot.
    pub fn items_for_slot(&self, slot: EquipmentSlot) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item_slot(item.id) == Some(slot))
    }
}
