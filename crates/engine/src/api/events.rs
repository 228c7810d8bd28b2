//! Host event entry point.
//!
//! Routes host lifecycle events to the Hybrid Points use cases. Failures are
//! logged and returned; the host keeps dispatching other events.

use std::sync::Arc;

use onepiece_domain::HybridPointsProposal;

use crate::infrastructure::hooks::HostEvent;
use crate::use_cases::hybrid_points::{HybridPointsError, HybridPointsUseCases};

pub struct SheetEventHandler {
    hybrid_points: Arc<HybridPointsUseCases>,
}

impl SheetEventHandler {
    pub fn new(hybrid_points: Arc<HybridPointsUseCases>) -> Self {
        Self { hybrid_points }
    }

    /// Handle one event. Returns the pool change it caused, if any.
    pub async fn handle(
        &self,
        event: HostEvent,
    ) -> Result<Option<HybridPointsProposal>, HybridPointsError> {
        let actor_id = event.actor_id();
        tracing::debug!(actor_id = %actor_id, event = event.name(), "Host event received");

        let result = match &event {
            HostEvent::RestCompleted { payload, .. } => {
                self.hybrid_points.rest.execute(actor_id, payload).await
            }
            HostEvent::AttackHit { .. } | HostEvent::AttackWorkflow { .. } => {
                match event.attack_outcome() {
                    Some(outcome) => self.hybrid_points.attack.execute(actor_id, outcome).await,
                    None => Ok(None),
                }
            }
        };

        if let Err(e) = &result {
            tracing::warn!(
                actor_id = %actor_id,
                event = event.name(),
                error = %e,
                "Host event handling failed"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::infrastructure::memory::InMemoryActorDocuments;
    use crate::infrastructure::settings::ModuleSettings;
    use onepiece_domain::ActorId;
    use serde_json::json;

    fn setup(points: i64) -> (Arc<InMemoryActorDocuments>, ActorId, App) {
        let store = Arc::new(InMemoryActorDocuments::new());
        let actor_id = ActorId::new();
        store.insert(
            actor_id,
            json!({
                "system": {"details": {"level": 3}},
                "flags": {"one-piece-supplement-module": {"hybridPoints": points}}
            }),
        );
        let app = App::new(store.clone(), ModuleSettings::default());
        (store, actor_id, app)
    }

    #[tokio::test]
    async fn hit_then_long_rest() {
        let (store, actor_id, app) = setup(1);

        let awarded = app
            .events
            .handle(HostEvent::AttackHit { actor_id, critical: false })
            .await
            .unwrap();
        assert_eq!(awarded.map(|p| p.after.current()), Some(2));

        let reset = app
            .events
            .handle(HostEvent::RestCompleted {
                actor_id,
                payload: json!({"restType": "long"}),
            })
            .await
            .unwrap();
        assert_eq!(reset.map(|p| p.after.current()), Some(0));
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn workflow_payload_is_classified() {
        let (_, actor_id, app) = setup(0);

        let awarded = app
            .events
            .handle(HostEvent::AttackWorkflow {
                actor_id,
                workflow: json!({"isCritical": true, "hitTargets": [{"id": "t1"}]}),
            })
            .await
            .unwrap();
        assert_eq!(awarded.map(|p| p.after.current()), Some(2));
    }

    #[tokio::test]
    async fn unknown_actor_is_reported() {
        let (_, _, app) = setup(0);
        let result = app
            .events
            .handle(HostEvent::AttackHit {
                actor_id: ActorId::new(),
                critical: false,
            })
            .await;
        assert!(matches!(result, Err(HybridPointsError::Port(_))));
    }
}
