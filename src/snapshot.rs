//! JSON snapshot of a fight: the adventurer, their bag and the beast.

use crate::beast::Beast;
use crate::character::Adventurer;
use crate::error::{CombatError, Result};
use crate::items::Bag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Everything the forecast and the gear search read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub adventurer: Adventurer,
    #[serde(default)]
    pub bag: Bag,
    #[serde(default)]
    pub beast: Option<Beast>,
}

impl CombatSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file. Does not validate.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check slot placement, that no item is held twice, and
    /// the beast descriptor.
    pub fn validate(&self) -> Result<()> {
        self.adventurer.equipment.validate()?;

        let mut seen = HashSet::new();
        let equipped = self.adventurer.equipment.iter_equipped().map(|(_, item)| item);
        for item in equipped.chain(self.bag.items()) {
            if item.is_empty() {
                continue;
            }
            if !seen.insert(item.id) {
                return Err(CombatError::DuplicateItem(item.id));
            }
        }

        if let Some(beast) = &self.beast {
            beast.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "adventurer": {
            "health": 100,
            "xp": 100,
            "stats": {"strength": 5, "luck": 2},
            "equipment": {"weapon": {"id": 46, "xp": 16}, "chest": {"id": 0, "xp": 0}},
            "item_specials_seed": 7
        },
        "bag": [{"id": 42, "xp": 100}],
        "beast": {"id": 1, "tier": 3, "level": 10, "health": 40}
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = CombatSnapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.adventurer.stats.strength, 5);
        assert_eq!(snapshot.adventurer.item_specials_seed, 7);
        assert!(snapshot.adventurer.equipment.chest.is_none());
        assert_eq!(snapshot.bag.len(), 1);
        assert_eq!(snapshot.beast.as_ref().map(|b| b.health), Some(40));
        snapshot.validate().unwrap();
    }

    #[test]
    fn test_missing_bag_and_beast_default() {
        let snapshot = CombatSnapshot::from_json(r#"{"adventurer": {"health": 10}}"#).unwrap();
        assert!(snapshot.bag.is_empty());
        assert!(snapshot.beast.is_none());
        snapshot.validate().unwrap();
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut snapshot = CombatSnapshot::from_json(SNAPSHOT).unwrap();
        snapshot.bag.add(crate::items::Item::new(46, 0)).unwrap();
        assert!(matches!(
            snapshot.validate(),
            Err(CombatError::DuplicateItem(46))
        ));
    }

    #[test]
    fn test_oversized_bag_rejected() {
        let items: Vec<String> = (50..66).map(|id| format!(r#"{{"id": {id}}}"#)).collect();
        let json = format!(r#"{{"adventurer": {{}}, "bag": [{}]}}"#, items.join(","));
        let err = CombatSnapshot::from_json(&json).unwrap_err();
        assert!(matches!(err, CombatError::Json(_)));
        assert!(err.to_string().contains("bag is full"), "{err}");
    }

    #[test]
    fn test_invalid_beast_rejected() {
        let json = r#"{"adventurer": {}, "beast": {"id": 99, "tier": 1, "level": 1, "health": 5}}"#;
        let snapshot = CombatSnapshot::from_json(json).unwrap();
        assert!(matches!(
            snapshot.validate(),
            Err(CombatError::InvalidBeast(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CombatSnapshot::from_json("{not json"),
            Err(CombatError::Json(_))
        ));
    }
}
