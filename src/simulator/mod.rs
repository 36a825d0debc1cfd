//! Combat outcome forecasting.
//!
//! `simulate_combat_outcomes` enumerates every critical-hit and armor-slot
//! branch exactly, so identical inputs always give identical results.
//! `sample_combat_outcomes` plays seeded random fights and is kept for
//! cross-checking the exact forecast.

mod config;
mod outcome;
mod report;
mod sampling;

pub use config::SimulationOptions;
pub use outcome::simulate_combat_outcomes;
pub use report::SimulationResult;
pub use sampling::sample_combat_outcomes;
