//! Coins to Belly conversion use case.
//!
//! Credits the Belly value of the whole purse, optionally emptying it.

use std::sync::Arc;

use async_trait::async_trait;
use onepiece_domain::{ActorId, CoinsToBellyProposal, BELLY_FLAG};

use crate::entities::{coin_updates, ActorSheet};
use crate::infrastructure::ports::FieldUpdates;
use crate::use_cases::transaction::SheetOperation;

use super::error::CurrencyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinsToBellyInput {
    /// Set every coin count to zero after crediting the Belly.
    pub zero_coins: bool,
}

impl Default for CoinsToBellyInput {
    fn default() -> Self {
        Self { zero_coins: true }
    }
}

pub struct ConvertCoinsToBelly {
    sheet: Arc<ActorSheet>,
}

impl ConvertCoinsToBelly {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }

    async fn compute(
        &self,
        actor_id: ActorId,
        input: &CoinsToBellyInput,
    ) -> Result<CoinsToBellyProposal, CurrencyError> {
        let belly = self.sheet.belly(actor_id).await?;
        let coins = self.sheet.coins(actor_id).await?;
        Ok(CoinsToBellyProposal::compute(belly, coins, input.zero_coins))
    }
}

#[async_trait]
impl SheetOperation for ConvertCoinsToBelly {
    type Input = CoinsToBellyInput;
    type Proposal = CoinsToBellyProposal;
    type Error = CurrencyError;

    async fn propose(
        &self,
        actor_id: ActorId,
        input: &CoinsToBellyInput,
    ) -> Result<CoinsToBellyProposal, CurrencyError> {
        self.compute(actor_id, input).await
    }

    async fn commit(
        &self,
        actor_id: ActorId,
        input: &CoinsToBellyInput,
    ) -> Result<CoinsToBellyProposal, CurrencyError> {
        let proposal = self.compute(actor_id, input).await?;
        if proposal.is_noop() {
            tracing::debug!(actor_id = %actor_id, "No coins to convert, skipping write");
            return Ok(proposal);
        }

        let mut updates = FieldUpdates::new();
        updates.insert(self.sheet.flag_path(BELLY_FLAG), proposal.new_belly.to_json());
        if input.zero_coins {
            updates.extend(coin_updates(&proposal.new_coins));
        }
        self.sheet.update(actor_id, updates).await?;

        tracing::info!(
            actor_id = %actor_id,
            gained = proposal.gained.value(),
            belly = proposal.new_belly.value(),
            zero_coins = input.zero_coins,
            "Converted coins to Belly"
        );
        Ok(proposal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockActorDocumentPort, PortError};
    use onepiece_domain::{BellyAmount, CoinSet, LevelResolver, CURRENCY_PATH};
    use serde_json::json;

    const NS: &str = "one-piece-supplement-module";

    fn purse_docs() -> MockActorDocumentPort {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_flag()
            .withf(|_, ns, key| ns == NS && key == BELLY_FLAG)
            .returning(|_, _, _| Ok(Some(json!(500))));
        docs.expect_get_field()
            .withf(|_, path| path == CURRENCY_PATH)
            .returning(|_, _| Ok(Some(json!({"pp": 1, "gp": 2, "ep": 0, "sp": 3, "cp": 4}))));
        docs
    }

    fn use_case(docs: MockActorDocumentPort) -> ConvertCoinsToBelly {
        ConvertCoinsToBelly::new(Arc::new(ActorSheet::new(
            Arc::new(docs),
            NS,
            Arc::new(LevelResolver::dnd5e()),
        )))
    }

    #[tokio::test]
    async fn propose_does_not_write() {
        let mut docs = purse_docs();
        docs.expect_set_fields().never();

        let proposal = use_case(docs)
            .propose(ActorId::new(), &CoinsToBellyInput::default())
            .await
            .unwrap();

        assert_eq!(proposal.gained, BellyAmount::new(123_400));
        assert_eq!(proposal.new_belly, BellyAmount::new(123_900));
        assert_eq!(proposal.new_coins, CoinSet::zero());
    }

    #[tokio::test]
    async fn commit_writes_belly_and_zeroed_coins_in_one_update() {
        let actor_id = ActorId::new();
        let mut docs = purse_docs();
        docs.expect_set_fields()
            .times(1)
            .withf(move |id, updates| {
                *id == actor_id
                    && updates.len() == 6
                    && updates.get("flags.one-piece-supplement-module.belly")
                        == Some(&json!(123_900))
                    && updates.get("system.currency.pp") == Some(&json!(0))
                    && updates.get("system.currency.cp") == Some(&json!(0))
            })
            .returning(|_, _| Ok(()));

        let committed = use_case(docs)
            .commit(actor_id, &CoinsToBellyInput::default())
            .await
            .unwrap();
        assert_eq!(committed.new_belly, BellyAmount::new(123_900));
    }

    #[tokio::test]
    async fn keeping_coins_only_writes_belly() {
        let mut docs = purse_docs();
        docs.expect_set_fields()
            .times(1)
            .withf(|_, updates| updates.len() == 1)
            .returning(|_, _| Ok(()));

        let committed = use_case(docs)
            .commit(ActorId::new(), &CoinsToBellyInput { zero_coins: false })
            .await
            .unwrap();
        assert_eq!(committed.new_coins.gp, 2);
    }

    #[tokio::test]
    async fn empty_purse_skips_the_write() {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_flag().returning(|_, _, _| Ok(None));
        docs.expect_get_field().returning(|_, _| Ok(None));
        docs.expect_set_fields().never();

        let committed = use_case(docs)
            .commit(ActorId::new(), &CoinsToBellyInput::default())
            .await
            .unwrap();
        assert!(committed.is_noop());
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let mut docs = purse_docs();
        docs.expect_set_fields()
            .returning(|_, _| Err(PortError::rejected("set_fields", "locked")));

        let result = use_case(docs)
            .commit(ActorId::new(), &CoinsToBellyInput::default())
            .await;
        assert!(matches!(result, Err(CurrencyError::Port(PortError::Rejected { .. }))));
    }
}
