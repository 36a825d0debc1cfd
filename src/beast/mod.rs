//! Beast snapshots and their type-derived materials.

pub mod types;

pub use types::*;
