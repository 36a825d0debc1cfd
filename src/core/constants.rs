// Adventurer
pub const STARTING_HEALTH: u32 = 100;
pub const HEALTH_PER_VITALITY: u32 = 15;
pub const MAX_ADVENTURER_HEALTH: u32 = 1023;
pub const MAX_STAT_VALUE: u32 = 31;
pub const NUM_STATS: usize = 7;

// Inventory
pub const BAG_CAPACITY: usize = 15;
pub const NUM_EQUIPMENT_SLOTS: usize = 8;
pub const NUM_LOOT_ITEMS: u8 = 101;

// Item specials
pub const SUFFIX_UNLOCK_LEVEL: u32 = 15;
pub const PREFIX_UNLOCK_LEVEL: u32 = 20;
pub const NUM_ITEM_SUFFIXES: u32 = 16;
pub const NUM_NAME_PREFIXES: u32 = 69;
pub const NUM_NAME_SUFFIXES: u32 = 18;

// Damage formulas
pub const MIN_ATTACK_DAMAGE: u32 = 4;
pub const BEAST_MIN_DAMAGE: u32 = 2;
pub const STRENGTH_DAMAGE_PERCENT: u32 = 10;
pub const NAME_PREFIX_MATCH_MULTIPLIER: u32 = 8;
pub const NAME_SUFFIX_MATCH_MULTIPLIER: u32 = 2;
pub const MAX_TIER: u8 = 5;
pub const TIER_POWER_BASE: u32 = 6;

// Jewelry: every bonus is this percentage per jewelry level
pub const JEWELRY_BONUS_PERCENT_PER_LEVEL: u32 = 3;

// Gold
pub const GOLD_REWARD_DIVISOR: u32 = 2;

// Beasts
pub const NUM_BEASTS: u8 = 75;
pub const BEASTS_PER_TYPE: u8 = 25;

// Simulation
pub const MAX_SIMULATION_ROUNDS: u32 = 600;
pub const PROBABILITY_FLOOR: f64 = 1e-10;
pub const DEFAULT_MONTE_CARLO_SAMPLES: u32 = 10_000;
