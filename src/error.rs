//! Error types for the fallible edges of the crate.
//!
//! The combat math, simulator and suggestion search never fail; they return
//! sentinels instead. Errors only come from snapshot loading and from
//! mutating equipment or the bag.

use crate::items::EquipmentSlot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombatError {
    #[error("unknown item id {0}")]
    UnknownItem(u8),

    #[error("item {id} belongs in the {expected:?} slot, found in {found:?}")]
    SlotMismatch {
        id: u8,
        expected: EquipmentSlot,
        found: EquipmentSlot,
    },

    #[error("bag is full ({capacity} items)")]
    BagFull { capacity: usize },

    #[error("item {0} is not in the bag")]
    NotInBag(u8),

    #[error("item {0} appears more than once across equipment and bag")]
    DuplicateItem(u8),

    #[error("invalid beast: {0}")]
    InvalidBeast(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CombatError>;
