//! Adventurer snapshot, stats and pending stat upgrades.

pub mod adventurer;
pub mod stats;
pub mod upgrades;

pub use adventurer::Adventurer;
pub use stats::{stat_changes, StatChange, StatChanges, StatType, Stats};
pub use upgrades::StatSelection;
