//! Belly to coins conversion use case.
//!
//! Withdraws Belly as coins, largest denomination first. Whatever is below
//! one copper piece stays as Belly.

use std::sync::Arc;

use async_trait::async_trait;
use onepiece_domain::{ActorId, BellyToCoinsProposal, BELLY_FLAG};

use crate::entities::{coin_updates, ActorSheet};
use crate::infrastructure::ports::FieldUpdates;
use crate::use_cases::transaction::SheetOperation;

use super::error::CurrencyError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BellyToCoinsInput {
    /// Belly to withdraw. `None` (or a non-finite number) means all of it.
    pub amount: Option<f64>,
}

impl BellyToCoinsInput {
    pub fn all() -> Self {
        Self { amount: None }
    }

    pub fn amount(amount: f64) -> Self {
        Self {
            amount: Some(amount),
        }
    }
}

pub struct ConvertBellyToCoins {
    sheet: Arc<ActorSheet>,
}

impl ConvertBellyToCoins {
    pub fn new(sheet: Arc<ActorSheet>) -> Self {
        Self { sheet }
    }

    async fn compute(
        &self,
        actor_id: ActorId,
        input: &BellyToCoinsInput,
    ) -> Result<BellyToCoinsProposal, CurrencyError> {
        let belly = self.sheet.belly(actor_id).await?;
        let coins = self.sheet.coins(actor_id).await?;
        Ok(BellyToCoinsProposal::compute(belly, coins, input.amount))
    }
}

#[async_trait]
impl SheetOperation for ConvertBellyToCoins {
    type Input = BellyToCoinsInput;
    type Proposal = BellyToCoinsProposal;
    type Error = CurrencyError;

    async fn propose(
        &self,
        actor_id: ActorId,
        input: &BellyToCoinsInput,
    ) -> Result<BellyToCoinsProposal, CurrencyError> {
        self.compute(actor_id, input).await
    }

    async fn commit(
        &self,
        actor_id: ActorId,
        input: &BellyToCoinsInput,
    ) -> Result<BellyToCoinsProposal, CurrencyError> {
        let proposal = self.compute(actor_id, input).await?;
        if proposal.is_noop() {
            tracing::debug!(
                actor_id = %actor_id,
                requested = proposal.amount.value(),
                "Nothing convertible, skipping write"
            );
            return Ok(proposal);
        }

        let mut updates = FieldUpdates::new();
        updates.insert(self.sheet.flag_path(BELLY_FLAG), proposal.new_belly.to_json());
        updates.extend(coin_updates(&proposal.new_coins));
        self.sheet.update(actor_id, updates).await?;

        tracing::info!(
            actor_id = %actor_id,
            converted = proposal.convertible().value(),
            remainder = proposal.breakdown.remainder,
            belly = proposal.new_belly.value(),
            "Converted Belly to coins"
        );
        Ok(proposal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockActorDocumentPort;
    use onepiece_domain::{BellyAmount, CoinSet, LevelResolver};
    use serde_json::json;

    const NS: &str = "one-piece-supplement-module";

    fn docs_with(belly: serde_json::Value, currency: serde_json::Value) -> MockActorDocumentPort {
        let mut docs = MockActorDocumentPort::new();
        docs.expect_get_flag()
            .returning(move |_, _, _| Ok(Some(belly.clone())));
        docs.expect_get_field()
            .returning(move |_, _| Ok(Some(currency.clone())));
        docs
    }

    fn use_case(docs: MockActorDocumentPort) -> ConvertBellyToCoins {
        ConvertBellyToCoins::new(Arc::new(ActorSheet::new(
            Arc::new(docs),
            NS,
            Arc::new(LevelResolver::dnd5e()),
        )))
    }

    #[tokio::test]
    async fn partial_withdrawal_keeps_remainder_as_belly() {
        let actor_id = ActorId::new();
        let mut docs = docs_with(json!(123_456), json!({}));
        docs.expect_set_fields()
            .times(1)
            .withf(move |id, updates| {
                *id == actor_id
                    && updates.get("flags.one-piece-supplement-module.belly") == Some(&json!(56))
                    && updates.get("system.currency.pp") == Some(&json!(1))
                    && updates.get("system.currency.gp") == Some(&json!(2))
                    && updates.get("system.currency.ep") == Some(&json!(0))
                    && updates.get("system.currency.sp") == Some(&json!(3))
                    && updates.get("system.currency.cp") == Some(&json!(4))
            })
            .returning(|_, _| Ok(()));

        let committed = use_case(docs)
            .commit(actor_id, &BellyToCoinsInput::all())
            .await
            .unwrap();
        assert_eq!(committed.breakdown.remainder, 56);
        assert_eq!(committed.new_belly, BellyAmount::new(56));
    }

    #[tokio::test]
    async fn coins_are_added_to_existing_purse() {
        let mut docs = docs_with(json!(20_000), json!({"gp": 5, "cp": 1}));
        docs.expect_set_fields()
            .times(1)
            .withf(|_, updates| {
                updates.get("system.currency.gp") == Some(&json!(6))
                    && updates.get("system.currency.cp") == Some(&json!(1))
                    && updates.get("flags.one-piece-supplement-module.belly")
                        == Some(&json!(10_000))
            })
            .returning(|_, _| Ok(()));

        let committed = use_case(docs)
            .commit(ActorId::new(), &BellyToCoinsInput::amount(10_000.0))
            .await
            .unwrap();
        assert_eq!(committed.new_coins, CoinSet { gp: 6, cp: 1, ..CoinSet::zero() });
    }

    #[tokio::test]
    async fn request_is_clamped_to_available_belly() {
        let mut docs = docs_with(json!(5_000), json!({}));
        docs.expect_set_fields().never();

        let proposal = use_case(docs)
            .propose(ActorId::new(), &BellyToCoinsInput::amount(99_999.7))
            .await
            .unwrap();
        assert_eq!(proposal.amount, BellyAmount::new(5_000));
        assert_eq!(proposal.breakdown.coins.ep, 1);
    }

    #[tokio::test]
    async fn sub_copper_amount_skips_the_write() {
        let mut docs = docs_with(json!(99), json!({}));
        docs.expect_set_fields().never();

        let committed = use_case(docs)
            .commit(ActorId::new(), &BellyToCoinsInput::all())
            .await
            .unwrap();
        assert!(committed.is_noop());
        assert_eq!(committed.new_belly, BellyAmount::new(99));
    }

    #[tokio::test]
    async fn non_finite_request_means_everything() {
        let docs = docs_with(json!(10_000), json!({}));

        let proposal = use_case(docs)
            .propose(ActorId::new(), &BellyToCoinsInput::amount(f64::NAN))
            .await
            .unwrap();
        assert_eq!(proposal.amount, BellyAmount::new(10_000));
    }
}
