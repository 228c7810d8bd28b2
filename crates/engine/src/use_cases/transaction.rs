//! Preview/commit orchestration shared by every sheet mutation.
//!
//! A [`SheetOperation`] knows how to compute a proposal and how to commit
//! it. A [`SheetFlow`] drives one operation through a [`SheetTransaction`]:
//! any number of previews, then either a cancel or one confirmed commit.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use onepiece_domain::{ActorId, DomainError, SheetTransaction, TransactionState};

/// A user-facing mutation of one actor sheet.
#[async_trait]
pub trait SheetOperation: Send + Sync {
    type Input: Clone + Send + Sync;
    type Proposal: Clone + fmt::Display + Send + Sync;
    type Error: From<DomainError> + fmt::Display + Send;

    /// Compute the prospective post-state without writing anything.
    async fn propose(
        &self,
        actor_id: ActorId,
        input: &Self::Input,
    ) -> Result<Self::Proposal, Self::Error>;

    /// Re-read host state, recompute, and persist with a single update.
    ///
    /// Returns what was actually committed, which may differ from the last
    /// preview if the sheet changed in between.
    async fn commit(
        &self,
        actor_id: ActorId,
        input: &Self::Input,
    ) -> Result<Self::Proposal, Self::Error>;
}

/// One preview/commit interaction for one actor.
pub struct SheetFlow<O: SheetOperation> {
    operation: Arc<O>,
    actor_id: ActorId,
    input: Option<O::Input>,
    transaction: SheetTransaction<O::Proposal>,
}

impl<O: SheetOperation> SheetFlow<O> {
    pub fn new(operation: Arc<O>, actor_id: ActorId) -> Self {
        Self {
            operation,
            actor_id,
            input: None,
            transaction: SheetTransaction::new(),
        }
    }

    pub fn state(&self) -> &TransactionState<O::Proposal> {
        self.transaction.state()
    }

    pub fn preview(&self) -> Option<&O::Proposal> {
        self.transaction.preview()
    }

    /// Show (or refresh) the preview for `input`.
    pub async fn propose(&mut self, input: O::Input) -> Result<O::Proposal, O::Error> {
        let proposal = self.operation.propose(self.actor_id, &input).await?;
        self.transaction.propose(proposal.clone())?;
        self.input = Some(input);

        tracing::debug!(actor_id = %self.actor_id, preview = %proposal, "Sheet change proposed");
        Ok(proposal)
    }

    /// Close the preview without writing.
    pub fn cancel(&mut self) -> Result<(), O::Error> {
        self.transaction.cancel()?;
        self.input = None;
        tracing::debug!(actor_id = %self.actor_id, "Sheet change cancelled");
        Ok(())
    }

    /// Commit the previewed change against fresh host state.
    pub async fn confirm(&mut self) -> Result<O::Proposal, O::Error> {
        let Some(input) = self.input.clone() else {
            return Err(DomainError::invalid_state_transition(format!(
                "cannot confirm while {}",
                self.transaction.state().name()
            ))
            .into());
        };
        self.transaction.confirm()?;

        match self.operation.commit(self.actor_id, &input).await {
            Ok(committed) => {
                self.transaction.complete(committed.clone())?;
                Ok(committed)
            }
            Err(e) => {
                tracing::warn!(actor_id = %self.actor_id, error = %e, "Sheet change failed");
                self.transaction.fail(e.to_string())?;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    enum CounterError {
        #[error("{0}")]
        Domain(#[from] DomainError),
        #[error("write failed")]
        WriteFailed,
    }

    /// Adds its input to a shared counter.
    #[derive(Default)]
    struct AddToCounter {
        value: AtomicI64,
        writes: AtomicUsize,
        fail: AtomicBool,
    }

    #[async_trait]
    impl SheetOperation for AddToCounter {
        type Input = i64;
        type Proposal = i64;
        type Error = CounterError;

        async fn propose(&self, _actor_id: ActorId, input: &i64) -> Result<i64, CounterError> {
            Ok(self.value.load(Ordering::SeqCst) + input)
        }

        async fn commit(&self, _actor_id: ActorId, input: &i64) -> Result<i64, CounterError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(CounterError::WriteFailed);
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.value.fetch_add(*input, Ordering::SeqCst) + input)
        }
    }

    #[tokio::test]
    async fn preview_then_confirm_writes_once() {
        let op = Arc::new(AddToCounter::default());
        let mut flow = SheetFlow::new(op.clone(), ActorId::new());

        assert_eq!(flow.propose(2).await.unwrap(), 2);
        assert_eq!(flow.propose(5).await.unwrap(), 5);
        assert_eq!(op.writes.load(Ordering::SeqCst), 0);

        assert_eq!(flow.confirm().await.unwrap(), 5);
        assert_eq!(op.writes.load(Ordering::SeqCst), 1);
        assert_eq!(flow.state(), &TransactionState::Done(5));
    }

    #[tokio::test]
    async fn commit_uses_fresh_state() {
        let op = Arc::new(AddToCounter::default());
        let mut flow = SheetFlow::new(op.clone(), ActorId::new());

        flow.propose(1).await.unwrap();
        op.value.store(10, Ordering::SeqCst);

        assert_eq!(flow.confirm().await.unwrap(), 11);
    }

    #[tokio::test]
    async fn cancel_writes_nothing() {
        let op = Arc::new(AddToCounter::default());
        let mut flow = SheetFlow::new(op.clone(), ActorId::new());

        flow.propose(3).await.unwrap();
        flow.cancel().unwrap();

        assert_eq!(flow.state(), &TransactionState::Idle);
        assert!(flow.confirm().await.is_err());
        assert_eq!(op.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn confirm_without_preview_is_rejected() {
        let op = Arc::new(AddToCounter::default());
        let mut flow = SheetFlow::new(op, ActorId::new());

        let result = flow.confirm().await;
        assert!(matches!(
            result,
            Err(CounterError::Domain(DomainError::InvalidStateTransition(_)))
        ));
    }

    #[tokio::test]
    async fn failed_commit_can_be_retried() {
        let op = Arc::new(AddToCounter::default());
        let mut flow = SheetFlow::new(op.clone(), ActorId::new());

        flow.propose(4).await.unwrap();
        op.fail.store(true, Ordering::SeqCst);
        assert!(matches!(flow.confirm().await, Err(CounterError::WriteFailed)));
        assert_eq!(flow.state().name(), "Failed");

        op.fail.store(false, Ordering::SeqCst);
        flow.propose(4).await.unwrap();
        assert_eq!(flow.confirm().await.unwrap(), 4);
    }
}
