//! Set Willpower bonus use case.
//!
//! Only the GM may change the bonus. The level part of Willpower is derived
//! from the sheet and is never written.

use std::sync::Arc;

use onepiece_domain::{resolve_bonus, ActorId, Willpower, WILLPOWER_BONUS_FLAG};
use serde_json::{json, Value};

use crate::entities::ActorSheet;

use super::error::WillpowerError;
use super::types::UserRole;

pub struct SetWillpowerBonus {
    sheet: Arc<ActorSheet>,
}

impl SetWillpowerBonus {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }

    /// Store `bonus` (coerced to an integer, anything unreadable is 0) and
    /// return the resulting Willpower.
    pub async fn execute(
        &self,
        actor_id: ActorId,
        role: UserRole,
        bonus: &Value,
    ) -> Result<Willpower, WillpowerError> {
        if !role.can_edit_willpower() {
            tracing::warn!(actor_id = %actor_id, ?role, "Willpower bonus edit denied");
            return Err(WillpowerError::NotAuthorized);
        }

        let bonus = resolve_bonus(Some(bonus));
        self.sheet
            .set_flag(actor_id, WILLPOWER_BONUS_FLAG, json!(bonus))
            .await?;

        let level = self.sheet.level(actor_id).await?;
        let willpower = Willpower::new(level, bonus);
        tracing::info!(actor_id = %actor_id, willpower = %willpower, "Willpower bonus set");
        Ok(willpower)
    }
}
