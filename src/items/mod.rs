//! Item system: catalog, specials, equipment, bag, scoring and gear search.

pub mod bag;
pub mod catalog;
pub mod equipment;
pub mod scoring;
pub mod specials;
pub mod suggestion;
pub mod types;

pub use bag::Bag;
pub use equipment::{new_items_equipped, Equipment};
pub use scoring::{calculate_combat_stats, score_gear, score_item, CombatStats, GearScore};
pub use suggestion::{suggest_best_combat_gear, GearSuggestion};
pub use types::*;
