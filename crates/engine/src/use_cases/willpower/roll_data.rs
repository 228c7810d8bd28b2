//! Willpower roll data use case.
//!
//! Adds `willpower.level`, `willpower.bonus` and `willpower.total` to an
//! actor's roll data so formulas can reference `@willpower.total`.

use std::sync::Arc;

use onepiece_domain::{ActorId, WILLPOWER_ROLL_KEY};
use serde_json::{Map, Value};

use crate::entities::ActorSheet;

use super::error::WillpowerError;

pub struct WillpowerRollData {
    sheet: Arc<ActorSheet>,
}

impl WillpowerRollData {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }

    /// Return `roll_data` with the willpower entry set. Non-object roll data
    /// is replaced by an object holding only that entry.
    pub async fn execute(
        &self,
        actor_id: ActorId,
        roll_data: Value,
    ) -> Result<Value, WillpowerError> {
        let willpower = self.sheet.willpower(actor_id).await?;

        let mut data = match roll_data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        data.insert(WILLPOWER_ROLL_KEY.to_string(), willpower.roll_data());
        Ok(Value::Object(data))
    }
}
