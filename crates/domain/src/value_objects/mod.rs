//! Value objects for the sheet supplement.

mod currency;
mod currency_exchange;
mod hybrid_points;
mod level;
mod rest;
mod willpower;

pub use currency::{
    belly_fill_percent, belly_to_coins, belly_to_coins_lenient, coins_to_belly, BellyAmount,
    CoinSet, ConversionBreakdown, Denomination, BELLY_FLAG, BELLY_PER_GP, CURRENCY_PATH,
    DEFAULT_BELLY_CAP,
};
pub use currency_exchange::{
    resolve_requested_amount, BellyAdjustmentProposal, BellyToCoinsProposal,
    CoinsToBellyProposal,
};
pub use hybrid_points::{
    capacity_for_level, capacity_for_level_value, clamp_points, AttackOutcome, HybridPoints,
    HybridPointsChange, HybridPointsProposal, ResourceSlot, HYBRID_POINTS_FLAG, MAX_CAPACITY,
    MIN_CAPACITY,
};
pub use level::{
    ClassLevelSum, DirectLevel, LevelResolver, LevelStrategy, NestedLevelValue, CLASSES_PATH,
    DETAILS_LEVEL_PATH,
};
pub use rest::RestType;
pub use willpower::{resolve_bonus, Willpower, WILLPOWER_BONUS_FLAG, WILLPOWER_ROLL_KEY};
