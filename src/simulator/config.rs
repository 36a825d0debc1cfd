//! Per-call simulation knobs.

use crate::core::constants::MAX_SIMULATION_ROUNDS;

/// Options for a single combat forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// The beast strikes once before the adventurer's first attack. Set this
    /// when new items were equipped mid-fight, which forfeits the first strike.
    pub initial_beast_strike: bool,

    /// Rounds resolved before the remaining probability counts as a stalemate.
    pub max_rounds: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            initial_beast_strike: false,
            max_rounds: MAX_SIMULATION_ROUNDS,
        }
    }
}

impl SimulationOptions {
    /// Forecast for a fight where the beast attacks first.
    pub fn beast_first() -> Self {
        Self {
            initial_beast_strike: true,
            ..Default::default()
        }
    }
}
