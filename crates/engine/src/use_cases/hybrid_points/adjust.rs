//! Adjust Hybrid Points use case.
//!
//! Spends, gains, sets or resets points. The pool's capacity is recomputed
//! from the character level on every change and the value is clamped into
//! it; out-of-range requests are never an error. The stored value and the
//! mirrored resource slot are written together in one update.

use std::sync::Arc;

use async_trait::async_trait;
use onepiece_domain::common::get_path;
use onepiece_domain::{ActorId, HybridPointsChange, HybridPointsProposal, HYBRID_POINTS_FLAG};
use serde_json::{json, Value};

use crate::entities::ActorSheet;
use crate::infrastructure::hooks::slot_updates;
use crate::infrastructure::settings::ModuleSettings;
use crate::use_cases::transaction::SheetOperation;

use super::error::HybridPointsError;

pub struct AdjustHybridPoints {
    sheet: Arc<ActorSheet>,
    settings: Arc<ModuleSettings>,
}

impl AdjustHybridPoints {
    pub fn new(sheet: Arc<ActorSheet>, settings: Arc<ModuleSettings>) -> Self {
        Self { sheet, settings }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.hybrid_points_enabled
    }

    async fn compute(
        &self,
        actor_id: ActorId,
        change: HybridPointsChange,
    ) -> Result<(Value, HybridPointsProposal), HybridPointsError> {
        if !self.is_enabled() {
            return Err(HybridPointsError::Disabled);
        }

        let record = self.sheet.record(actor_id).await?;
        let level = self.sheet.level_of(&record);
        let before = self.sheet.hybrid_points_of(&record);
        Ok((record, HybridPointsProposal::compute(before, change, level)))
    }
}

#[async_trait]
impl SheetOperation for AdjustHybridPoints {
    type Input = HybridPointsChange;
    type Proposal = HybridPointsProposal;
    type Error = HybridPointsError;

    async fn propose(
        &self,
        actor_id: ActorId,
        change: &HybridPointsChange,
    ) -> Result<HybridPointsProposal, HybridPointsError> {
        let (_, proposal) = self.compute(actor_id, *change).await?;
        Ok(proposal)
    }

    async fn commit(
        &self,
        actor_id: ActorId,
        change: &HybridPointsChange,
    ) -> Result<HybridPointsProposal, HybridPointsError> {
        let (record, proposal) = self.compute(actor_id, *change).await?;
        let after = proposal.after;

        let mut updates = slot_updates(
            &record,
            &after,
            &self.settings.resource_slot_path,
            &self.settings.resource_slot_label,
        );
        let flag = self.sheet.flag_path(HYBRID_POINTS_FLAG);
        let stored = json!(after.current());
        if get_path(&record, &flag) != Some(&stored) {
            updates.insert(flag, stored);
        }

        if updates.is_empty() {
            tracing::debug!(actor_id = %actor_id, pool = %after, "Hybrid Points unchanged");
            return Ok(proposal);
        }

        self.sheet.update(actor_id, updates).await?;
        tracing::info!(
            actor_id = %actor_id,
            change = %proposal.change,
            before = %proposal.before,
            after = %after,
            "Hybrid Points updated"
        );
        Ok(proposal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryActorDocuments;
    use crate::infrastructure::ports::{ActorDocumentPort, MockActorDocumentPort, PortError};
    use crate::use_cases::transaction::SheetFlow;
    use onepiece_domain::{HybridPoints, LevelResolver};

    const NS: &str = "one-piece-supplement-module";

    fn use_case(docs: Arc<dyn ActorDocumentPort>, settings: ModuleSettings) -> AdjustHybridPoints {
        let sheet = ActorSheet::new(docs, NS, Arc::new(LevelResolver::dnd5e()));
        AdjustHybridPoints::new(Arc::new(sheet), Arc::new(settings))
    }

    fn level_five_actor(store: &InMemoryActorDocuments, points: i64) -> ActorId {
        let actor_id = ActorId::new();
        store.insert(
            actor_id,
            json!({
                "system": {"details": {"level": 5}},
                "flags": {"one-piece-supplement-module": {"hybridPoints": points}}
            }),
        );
        actor_id
    }

    #[tokio::test]
    async fn gain_is_clamped_at_capacity() {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = level_five_actor(&store, 4);
        let adjust = use_case(store.clone(), ModuleSettings::default());

        let proposal = adjust
            .commit(actor_id, &HybridPointsChange::Adjust(1))
            .await
            .unwrap();

        assert_eq!(proposal.after, HybridPoints::new(4, 5));
        let record = store.snapshot(actor_id).unwrap();
        assert_eq!(record["flags"][NS]["hybridPoints"], json!(4));
        assert_eq!(record["system"]["resources"]["tertiary"]["value"], json!(4));
        assert_eq!(record["system"]["resources"]["tertiary"]["max"], json!(4));
    }

    #[tokio::test]
    async fn spend_and_mirror_in_one_write() {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = level_five_actor(&store, 3);
        let adjust = use_case(store.clone(), ModuleSettings::default());

        adjust
            .commit(actor_id, &HybridPointsChange::Adjust(-2))
            .await
            .unwrap();

        assert_eq!(store.write_count(), 1);
        let record = store.snapshot(actor_id).unwrap();
        assert_eq!(record["flags"][NS]["hybridPoints"], json!(1));
        assert_eq!(record["system"]["resources"]["tertiary"]["label"], json!("Hybrid Points"));
    }

    #[tokio::test]
    async fn second_identical_commit_is_a_noop() {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = level_five_actor(&store, 2);
        let adjust = use_case(store.clone(), ModuleSettings::default());

        adjust.commit(actor_id, &HybridPointsChange::Set(3)).await.unwrap();
        adjust.commit(actor_id, &HybridPointsChange::Set(3)).await.unwrap();

        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn corrupted_value_reads_as_zero() {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = ActorId::new();
        store.insert(
            actor_id,
            json!({"flags": {"one-piece-supplement-module": {"hybridPoints": "lots"}}}),
        );
        let adjust = use_case(store.clone(), ModuleSettings::default());

        let proposal = adjust
            .propose(actor_id, &HybridPointsChange::Adjust(1))
            .await
            .unwrap();
        assert_eq!(proposal.before, HybridPoints::new(0, 0));
        assert_eq!(proposal.after.current(), 1);
        assert_eq!(proposal.after.capacity(), 2);
    }

    #[tokio::test]
    async fn preview_then_confirm_through_a_flow() {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = level_five_actor(&store, 0);
        let adjust = Arc::new(use_case(store.clone(), ModuleSettings::default()));

        let mut flow = SheetFlow::new(adjust, actor_id);
        let preview = flow.propose(HybridPointsChange::Adjust(2)).await.unwrap();
        assert_eq!(preview.to_string(), "Hybrid Points: 0/4 -> 2/4 (+2)");
        assert_eq!(store.write_count(), 0);

        flow.confirm().await.unwrap();
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn disabled_pool_rejects_changes() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_record().never();
        docs.expect_set_fields().never();
        let settings = ModuleSettings {
            hybrid_points_enabled: false,
            ..ModuleSettings::default()
        };

        let result = use_case(Arc::new(docs), settings)
            .commit(ActorId::new(), &HybridPointsChange::Reset)
            .await;
        assert!(matches!(result, Err(HybridPointsError::Disabled)));
    }

    #[tokio::test]
    async fn host_rejection_is_reported() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_record()
            .returning(|_| Ok(json!({"system": {"details": {"level": 1}}})));
        docs.expect_set_fields()
            .times(1)
            .returning(|_, _| Err(PortError::rejected("set_fields", "offline")));

        let result = use_case(Arc::new(docs), ModuleSettings::default())
            .commit(ActorId::new(), &HybridPointsChange::Adjust(1))
            .await;
        assert!(matches!(result, Err(HybridPointsError::Port(_))));
    }
}
