//! Survivor Combat - combat forecasting and gear suggestion for an on-chain
//! dungeon crawler.
//!
//! Everything here is a pure function of an adventurer, their bag and the
//! beast they face. Nothing is mutated: forecasts and suggestions are new
//! values built from cloned inputs.

pub mod beast;
pub mod character;
pub mod core;
pub mod error;
pub mod items;
pub mod simulator;
pub mod snapshot;

pub use beast::Beast;
pub use character::Adventurer;
pub use error::{CombatError, Result};
pub use items::{suggest_best_combat_gear, Bag, GearSuggestion, Item};
pub use simulator::{
    sample_combat_outcomes, simulate_combat_outcomes, SimulationOptions, SimulationResult,
};
pub use snapshot::CombatSnapshot;
