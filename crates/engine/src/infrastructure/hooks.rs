//! Host lifecycle events and the pre-update interceptor for Hybrid Points.

use std::sync::Arc;

use onepiece_domain::common::get_path;
use onepiece_domain::{
    ActorId, AttackOutcome, HybridPoints, LevelResolver, HYBRID_POINTS_FLAG,
};
use serde_json::{json, Value};

use crate::infrastructure::ports::{flag_path, FieldUpdates, PreUpdateInterceptor};
use crate::infrastructure::settings::ModuleSettings;

/// Events the host feeds to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// A rest finished; the payload is the host's rest result.
    RestCompleted { actor_id: ActorId, payload: Value },
    /// Combat automation resolved an attack that hit.
    AttackHit { actor_id: ActorId, critical: bool },
    /// Raw combat automation workflow, classified on receipt.
    AttackWorkflow { actor_id: ActorId, workflow: Value },
}

impl HostEvent {
    pub fn actor_id(&self) -> ActorId {
        match self {
            Self::RestCompleted { actor_id, .. }
            | Self::AttackHit { actor_id, .. }
            | Self::AttackWorkflow { actor_id, .. } => *actor_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RestCompleted { .. } => "rest_completed",
            Self::AttackHit { .. } => "attack_hit",
            Self::AttackWorkflow { .. } => "attack_workflow",
        }
    }

    /// How the attack landed, for attack events.
    pub fn attack_outcome(&self) -> Option<AttackOutcome> {
        match self {
            Self::AttackHit { critical: true, .. } => Some(AttackOutcome::Critical),
            Self::AttackHit { critical: false, .. } => Some(AttackOutcome::Hit),
            Self::AttackWorkflow { workflow, .. } => Some(AttackOutcome::from_workflow(workflow)),
            Self::RestCompleted { .. } => None,
        }
    }
}

/// Fields to write so the slot at `slot_path` shows `pool`.
///
/// Only fields whose stored JSON differs from the target are returned; a
/// missing or non-numeric field counts as different. An empty map means the
/// slot is already in sync.
pub fn slot_updates(
    record: &Value,
    pool: &HybridPoints,
    slot_path: &str,
    label: &str,
) -> FieldUpdates {
    let target = pool.to_slot(label);
    let fields = [
        ("label", json!(target.label)),
        ("value", json!(target.value)),
        ("max", json!(target.max)),
    ];

    fields
        .into_iter()
        .map(|(field, wanted)| (format!("{}.{}", slot_path, field), wanted))
        .filter(|(path, wanted)| get_path(record, path) != Some(wanted))
        .collect()
}

/// Clamps any pending Hybrid Points write and mirrors it into the resource
/// slot within the same update.
pub struct HybridPointsMirror {
    settings: ModuleSettings,
    levels: Arc<LevelResolver>,
}

impl HybridPointsMirror {
    pub fn new(settings: ModuleSettings, levels: Arc<LevelResolver>) -> Self {
        Self { settings, levels }
    }

    fn flag_path(&self) -> String {
        flag_path(&self.settings.namespace, HYBRID_POINTS_FLAG)
    }
}

impl PreUpdateInterceptor for HybridPointsMirror {
    fn name(&self) -> &'static str {
        "hybrid_points_mirror"
    }

    fn before_update(&self, record: &Value, pending: &mut FieldUpdates) {
        if !self.settings.hybrid_points_enabled {
            return;
        }

        let path = self.flag_path();
        let Some(requested) = pending.get(&path) else {
            return;
        };

        let level = self.levels.resolve(record);
        let pool = HybridPoints::from_stored(Some(requested), level);
        pending.insert(path, json!(pool.current()));

        let mirror = slot_updates(
            record,
            &pool,
            &self.settings.resource_slot_path,
            &self.settings.resource_slot_label,
        );
        if !mirror.is_empty() {
            tracing::debug!(
                pool = %pool,
                fields = mirror.len(),
                "Mirroring Hybrid Points into resource slot"
            );
        }
        pending.extend(mirror);
    }
}
