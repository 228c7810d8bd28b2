//! Actor sheet entity module.
//!
//! Reads the add-on's values off a host actor document and writes them back.
//! Every reader is lenient: missing or malformed data reads as zero.

use std::sync::Arc;

use onepiece_domain::common::get_path;
use onepiece_domain::{
    resolve_bonus, ActorId, BellyAmount, CoinSet, Denomination, HybridPoints, LevelResolver,
    Willpower, BELLY_FLAG, CURRENCY_PATH, HYBRID_POINTS_FLAG, WILLPOWER_BONUS_FLAG,
};
use serde_json::{json, Value};

use crate::infrastructure::ports::{flag_path, ActorDocumentPort, FieldUpdates, PortError};

/// Field updates that set every denomination of the purse to `coins`.
pub fn coin_updates(coins: &CoinSet) -> FieldUpdates {
    Denomination::DESCENDING
        .iter()
        .map(|d| (format!("{}.{}", CURRENCY_PATH, d.as_str()), json!(coins.get(*d))))
        .collect()
}

/// Actor sheet entity - the add-on's view of one actor document.
pub struct ActorSheet {
    docs: Arc<dyn ActorDocumentPort>,
    namespace: String,
    levels: Arc<LevelResolver>,
}

impl ActorSheet {
    pub fn new(
        docs: Arc<dyn ActorDocumentPort>,
        namespace: impl Into<String>,
        levels: Arc<LevelResolver>,
    ) -> Self {
        Self {
            docs,
            namespace: namespace.into(),
            levels,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Record path of one of this add-on's flags.
    pub fn flag_path(&self, key: &str) -> String {
        flag_path(&self.namespace, key)
    }

    pub async fn record(&self, actor_id: ActorId) -> Result<Value, PortError> {
        self.docs.get_record(actor_id).await
    }

    pub async fn belly(&self, actor_id: ActorId) -> Result<BellyAmount, PortError> {
        let stored = self.docs.get_flag(actor_id, &self.namespace, BELLY_FLAG).await?;
        Ok(BellyAmount::from_lenient(stored.as_ref()))
    }

    pub async fn coins(&self, actor_id: ActorId) -> Result<CoinSet, PortError> {
        let stored = self.docs.get_field(actor_id, CURRENCY_PATH).await?;
        Ok(CoinSet::from_host(stored.as_ref()))
    }

    /// Character level from the first resolver probe that matches, else 0.
    pub async fn level(&self, actor_id: ActorId) -> Result<i64, PortError> {
        let record = self.record(actor_id).await?;
        Ok(self.level_of(&record))
    }

    pub fn level_of(&self, record: &Value) -> i64 {
        match self.levels.resolve_with_source(record) {
            Some((level, source)) => {
                tracing::trace!(level, source, "Resolved character level");
                level
            }
            None => {
                tracing::debug!(
                    probes = ?self.levels.strategy_names(),
                    "No level found on actor record, using 0"
                );
                0
            }
        }
    }

    pub async fn willpower_bonus(&self, actor_id: ActorId) -> Result<i64, PortError> {
        let stored = self
            .docs
            .get_flag(actor_id, &self.namespace, WILLPOWER_BONUS_FLAG)
            .await?;
        Ok(resolve_bonus(stored.as_ref()))
    }

    pub async fn willpower(&self, actor_id: ActorId) -> Result<Willpower, PortError> {
        let level = self.level(actor_id).await?;
        let bonus = self.willpower_bonus(actor_id).await?;
        Ok(Willpower::new(level, bonus))
    }

    /// The Hybrid Points pool stored on `record`, clamped to its level.
    pub fn hybrid_points_of(&self, record: &Value) -> HybridPoints {
        let stored = get_path(record, &self.flag_path(HYBRID_POINTS_FLAG));
        HybridPoints::from_stored(stored, self.level_of(record))
    }

    /// Persist all `updates` in one host call.
    pub async fn update(&self, actor_id: ActorId, updates: FieldUpdates) -> Result<(), PortError> {
        self.docs.set_fields(actor_id, updates).await
    }

    pub async fn set_flag(
        &self,
        actor_id: ActorId,
        key: &str,
        value: Value,
    ) -> Result<(), PortError> {
        self.docs.set_flag(actor_id, &self.namespace, key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockActorDocumentPort;

    const NS: &str = "one-piece-supplement-module";

    fn sheet(docs: MockActorDocumentPort) -> ActorSheet {
        ActorSheet::new(Arc::new(docs), NS, Arc::new(LevelResolver::dnd5e()))
    }

    #[tokio::test]
    async fn belly_reads_leniently() {
        let actor_id = ActorId::new();
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_flag()
            .withf(move |id, ns, key| *id == actor_id && ns == NS && key == BELLY_FLAG)
            .returning(|_, _, _| Ok(Some(json!("12500.9"))));

        let belly = sheet(docs).belly(actor_id).await.unwrap();
        assert_eq!(belly, BellyAmount::new(12_500));
    }

    #[tokio::test]
    async fn missing_belly_is_zero() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_flag().returning(|_, _, _| Ok(None));

        let belly = sheet(docs).belly(ActorId::new()).await.unwrap();
        assert_eq!(belly, BellyAmount::ZERO);
    }

    #[tokio::test]
    async fn coins_come_from_currency_field() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_field()
            .withf(|_, path| path == CURRENCY_PATH)
            .returning(|_, _| Ok(Some(json!({"gp": 2, "sp": "3", "cp": -4}))));

        let coins = sheet(docs).coins(ActorId::new()).await.unwrap();
        assert_eq!(coins, CoinSet { gp: 2, sp: 3, ..CoinSet::zero() });
    }

    #[tokio::test]
    async fn willpower_combines_level_and_bonus() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_record().returning(|_| {
            Ok(json!({"system": {"classes": {"a": {"levels": 5}, "b": {"levels": 4}}}}))
        });
        docs.expect_get_flag()
            .withf(|_, _, key| key == WILLPOWER_BONUS_FLAG)
            .returning(|_, _, _| Ok(Some(json!(-2))));

        let wp = sheet(docs).willpower(ActorId::new()).await.unwrap();
        assert_eq!(wp.total(), 7);
    }

    #[tokio::test]
    async fn port_errors_propagate() {
        let actor_id = ActorId::new();
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_record()
            .returning(|id| Err(PortError::not_found(id)));

        let result = sheet(docs).level(actor_id).await;
        assert!(matches!(result, Err(PortError::ActorNotFound(id)) if id == actor_id));
    }

    #[test]
    fn hybrid_points_are_clamped_to_level() {
        let sheet = sheet(MockActorDocumentPort::new());
        let record = json!({
            "system": {"details": {"level": 3}},
            "flags": {"one-piece-supplement-module": {"hybridPoints": 8}}
        });
        let pool = sheet.hybrid_points_of(&record);
        assert_eq!((pool.current(), pool.capacity()), (3, 3));
    }

    #[test]
    fn coin_updates_cover_every_denomination() {
        let updates = coin_updates(&CoinSet { pp: 1, cp: 7, ..CoinSet::zero() });
        assert_eq!(updates.len(), 5);
        assert_eq!(updates.get("system.currency.pp"), Some(&json!(1)));
        assert_eq!(updates.get("system.currency.gp"), Some(&json!(0)));
        assert_eq!(updates.get("system.currency.cp"), Some(&json!(7)));
    }
}
