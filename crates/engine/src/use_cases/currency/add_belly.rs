//! Add Belly use case.
//!
//! Credits or debits the Belly total directly (loot, purchases). The total
//! never drops below zero.

use std::sync::Arc;

use async_trait::async_trait;
use onepiece_domain::{ActorId, BellyAdjustmentProposal, BELLY_FLAG};

use crate::entities::ActorSheet;
use crate::infrastructure::ports::FieldUpdates;
use crate::use_cases::transaction::SheetOperation;

use super::error::CurrencyError;

pub struct AddBelly {
    sheet: Arc<ActorSheet>,
}

impl AddBelly {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }
}

#[async_trait]
impl SheetOperation for AddBelly {
    /// Signed change to the total.
    type Input = i64;
    type Proposal = BellyAdjustmentProposal;
    type Error = CurrencyError;

    async fn propose(
        &self,
        actor_id: ActorId,
        delta: &i64,
    ) -> Result<BellyAdjustmentProposal, CurrencyError> {
        let current = self.sheet.belly(actor_id).await?;
        Ok(BellyAdjustmentProposal::compute(current, *delta))
    }

    async fn commit(
        &self,
        actor_id: ActorId,
        delta: &i64,
    ) -> Result<BellyAdjustmentProposal, CurrencyError> {
        let proposal = self.propose(actor_id, delta).await?;
        if proposal.is_noop() {
            return Ok(proposal);
        }

        let mut updates = FieldUpdates::new();
        updates.insert(self.sheet.flag_path(BELLY_FLAG), proposal.new.to_json());
        self.sheet.update(actor_id, updates).await?;

        tracing::info!(
            actor_id = %actor_id,
            delta = *delta,
            belly = proposal.new.value(),
            "Belly adjusted"
        );
        Ok(proposal)
    }
}
