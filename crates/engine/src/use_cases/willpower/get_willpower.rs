//! Read Willpower use case.

use std::sync::Arc;

use onepiece_domain::{ActorId, Willpower};

use crate::entities::ActorSheet;

use super::error::WillpowerError;

pub struct GetWillpower {
    sheet: Arc<ActorSheet>,
}

impl GetWillpower {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }

    pub async fn execute(&self, actor_id: ActorId) -> Result<Willpower, WillpowerError> {
        Ok(self.sheet.willpower(actor_id).await?)
    }
}
