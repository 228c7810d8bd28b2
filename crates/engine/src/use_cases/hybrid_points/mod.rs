//! Hybrid Points use cases.
//!
//! A bounded per-character pool. Capacity follows the character level
//! (2 at level 1 up to 10 at level 16+), the value is clamped on every write
//! and mirrored into a generic resource slot for combat automation.

use std::sync::Arc;

mod adjust;
mod attack;
mod error;
mod mirror;
mod rest;

pub use adjust::AdjustHybridPoints;
pub use attack::AwardOnHit;
pub use error::HybridPointsError;
pub use mirror::SyncResourceMirror;
pub use rest::ResetOnLongRest;

/// Container for Hybrid Points use cases.
pub struct HybridPointsUseCases {
    pub adjust: Arc<AdjustHybridPoints>,
    pub rest: Arc<ResetOnLongRest>,
    pub attack: Arc<AwardOnHit>,
    pub mirror: Arc<SyncResourceMirror>,
}

impl HybridPointsUseCases {
    pub fn new(
        adjust: Arc<AdjustHybridPoints>,
        rest: Arc<ResetOnLongRest>,
        attack: Arc<AwardOnHit>,
        mirror: Arc<SyncResourceMirror>,
    ) -> Self {
        Self {
            adjust,
            rest,
            attack,
            mirror,
        }
    }
}
