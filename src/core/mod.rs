//! Game constants, progression curves and the shared combat math.

pub mod combat_math;
pub mod constants;
pub mod progression;

pub use combat_math::{
    beast_damage_by_slot, calculate_attack_damage, calculate_beast_damage, calculate_gold_reward,
    empty_slot_damage, DamageSummary,
};
pub use progression::*;
