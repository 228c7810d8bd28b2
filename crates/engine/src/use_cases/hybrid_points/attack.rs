//! Hit award use case.

use std::sync::Arc;

use onepiece_domain::{ActorId, AttackOutcome, HybridPointsChange, HybridPointsProposal};

use crate::infrastructure::settings::ModuleSettings;
use crate::use_cases::transaction::SheetOperation;

use super::adjust::AdjustHybridPoints;
use super::error::HybridPointsError;

/// Awards Hybrid Points when an attack lands.
///
/// A hit earns `hybrid_points_per_hit`; a critical earns that plus
/// `hybrid_points_per_crit`. The pool still caps at its capacity.
pub struct AwardOnHit {
    adjust: Arc<AdjustHybridPoints>,
    settings: Arc<ModuleSettings>,
}

impl AwardOnHit {
    pub fn new(adjust: Arc<AdjustHybridPoints>, settings: Arc<ModuleSettings>) -> Self {
        Self { adjust, settings }
    }

    pub fn award_for(&self, outcome: AttackOutcome) -> i64 {
        match outcome {
            AttackOutcome::Miss => 0,
            AttackOutcome::Hit => self.settings.hybrid_points_per_hit,
            AttackOutcome::Critical => self
                .settings
                .hybrid_points_per_hit
                .saturating_add(self.settings.hybrid_points_per_crit),
        }
    }

    pub async fn execute(
        &self,
        actor_id: ActorId,
        outcome: AttackOutcome,
    ) -> Result<Option<HybridPointsProposal>, HybridPointsError> {
        if !self.adjust.is_enabled() {
            return Ok(None);
        }

        let award = self.award_for(outcome);
        if award == 0 {
            return Ok(None);
        }

        let proposal = self
            .adjust
            .commit(actor_id, &HybridPointsChange::Adjust(award))
            .await?;
        tracing::debug!(
            actor_id = %actor_id,
            ?outcome,
            award,
            pool = %proposal.after,
            "Hybrid Points awarded for attack"
        );
        Ok(Some(proposal))
    }
}
