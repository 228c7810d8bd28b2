extern crate self as onepiece_domain;

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;

pub use aggregates::{SheetTransaction, TransactionState};

// Re-export ID types
pub use ids::ActorId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    belly_fill_percent, belly_to_coins, belly_to_coins_lenient, capacity_for_level,
    capacity_for_level_value, clamp_points, coins_to_belly, resolve_bonus,
    resolve_requested_amount, AttackOutcome, BellyAdjustmentProposal, BellyAmount,
    BellyToCoinsProposal, ClassLevelSum, CoinSet, CoinsToBellyProposal, ConversionBreakdown,
    Denomination, DirectLevel, HybridPoints, HybridPointsChange, HybridPointsProposal,
    LevelResolver, LevelStrategy, NestedLevelValue, ResourceSlot, RestType, Willpower,
    BELLY_FLAG, BELLY_PER_GP, CLASSES_PATH, CURRENCY_PATH, DEFAULT_BELLY_CAP, DETAILS_LEVEL_PATH,
    HYBRID_POINTS_FLAG, MAX_CAPACITY, MIN_CAPACITY, WILLPOWER_BONUS_FLAG, WILLPOWER_ROLL_KEY,
};
