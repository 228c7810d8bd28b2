//! Long rest reset use case.

use std::sync::Arc;

use onepiece_domain::{ActorId, HybridPointsChange, HybridPointsProposal, RestType};
use serde_json::Value;

use crate::use_cases::transaction::SheetOperation;

use super::adjust::AdjustHybridPoints;
use super::error::HybridPointsError;

/// Empties the pool when a long rest completes. Short rests leave it alone.
pub struct ResetOnLongRest {
    adjust: Arc<AdjustHybridPoints>,
}

impl ResetOnLongRest {
    pub fn new(adjust: Arc<AdjustHybridPoints>) -> Self {
        Self { adjust }
    }

    /// Returns the reset that was applied, or `None` if the rest didn't
    /// qualify or the pool is disabled.
    pub async fn execute(
        &self,
        actor_id: ActorId,
        rest_payload: &Value,
    ) -> Result<Option<HybridPointsProposal>, HybridPointsError> {
        if !self.adjust.is_enabled() {
            return Ok(None);
        }

        let rest = RestType::detect(rest_payload);
        if !rest.is_long() {
            tracing::debug!(actor_id = %actor_id, ?rest, "Rest does not reset Hybrid Points");
            return Ok(None);
        }

        let proposal = self.adjust.commit(actor_id, &HybridPointsChange::Reset).await?;
        tracing::info!(
            actor_id = %actor_id,
            pool = %proposal.after,
            "Hybrid Points reset after long rest"
        );
        Ok(Some(proposal))
    }
}
