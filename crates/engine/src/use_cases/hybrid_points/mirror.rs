//! Resource slot sync use case.
//!
//! Repairs the mirrored resource slot when it has drifted from the stored
//! pool, e.g. after a level change or manual sheet edits.

use std::sync::Arc;

use onepiece_domain::ActorId;

use crate::entities::ActorSheet;
use crate::infrastructure::hooks::slot_updates;
use crate::infrastructure::settings::ModuleSettings;

use super::error::HybridPointsError;

pub struct SyncResourceMirror {
    sheet: Arc<ActorSheet>,
    settings: Arc<ModuleSettings>,
}

impl SyncResourceMirror {
    pub fn new(sheet: Arc<ActorSheet>, settings: Arc<ModuleSettings>) -> Self {
        Self { sheet, settings }
    }

    /// Returns whether anything had to be written.
    pub async fn execute(&self, actor_id: ActorId) -> Result<bool, HybridPointsError> {
        if !self.settings.hybrid_points_enabled {
            return Ok(false);
        }

        let record = self.sheet.record(actor_id).await?;
        let pool = self.sheet.hybrid_points_of(&record);
        let updates = slot_updates(
            &record,
            &pool,
            &self.settings.resource_slot_path,
            &self.settings.resource_slot_label,
        );
        if updates.is_empty() {
            return Ok(false);
        }

        self.sheet.update(actor_id, updates).await?;
        tracing::debug!(actor_id = %actor_id, pool = %pool, "Resource slot resynced");
        Ok(true)
    }
}
