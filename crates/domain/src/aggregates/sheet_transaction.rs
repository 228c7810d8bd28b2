//! Two-phase preview/commit state machine for sheet mutations.
//!
//! ```text
//! Idle --propose--> Previewing --confirm--> Committing --complete--> Done
//!   ^                 |    ^                     |
//!   +-----cancel------+    +--propose            +--fail--> Failed --propose--> Previewing
//! ```
//!
//! The machine only tracks state. Confirming hands back the previewed
//! snapshot for display purposes; the caller must recompute against fresh
//! host state before writing and report the committed value via `complete`.

use crate::error::DomainError;

/// Current phase of a sheet transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionState<P> {
    /// Nothing proposed yet
    Idle,
    /// A proposal is on screen; may be replaced any number of times
    Previewing(P),
    /// The user confirmed; the write is in flight
    Committing(P),
    /// The write landed; holds the committed proposal
    Done(P),
    /// The write failed; holds the error message
    Failed(String),
}

impl<P> TransactionState<P> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Previewing(_) => "Previewing",
            Self::Committing(_) => "Committing",
            Self::Done(_) => "Done",
            Self::Failed(_) => "Failed",
        }
    }
}

/// A single preview/commit interaction.
#[derive(Debug, Clone)]
pub struct SheetTransaction<P> {
    state: TransactionState<P>,
}

impl<P> Default for SheetTransaction<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SheetTransaction<P> {
    pub fn new() -> Self {
        Self {
            state: TransactionState::Idle,
        }
    }

    pub fn state(&self) -> &TransactionState<P> {
        &self.state
    }

    /// The proposal currently being previewed, if any.
    pub fn preview(&self) -> Option<&P> {
        match &self.state {
            TransactionState::Previewing(p) => Some(p),
            _ => None,
        }
    }

    /// The committed proposal once the transaction is done.
    pub fn committed(&self) -> Option<&P> {
        match &self.state {
            TransactionState::Done(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TransactionState::Done(_))
    }

    /// Show a (new) proposal. Allowed from Idle, Previewing and Failed.
    pub fn propose(&mut self, proposal: P) -> Result<&P, DomainError> {
        match self.state {
            TransactionState::Idle
            | TransactionState::Previewing(_)
            | TransactionState::Failed(_) => {
                self.state = TransactionState::Previewing(proposal);
                match &self.state {
                    TransactionState::Previewing(p) => Ok(p),
                    _ => Err(self.transition_error("propose")),
                }
            }
            _ => Err(self.transition_error("propose")),
        }
    }

    /// Drop the preview without writing anything.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.state {
            TransactionState::Idle | TransactionState::Previewing(_) => {
                self.state = TransactionState::Idle;
                Ok(())
            }
            _ => Err(self.transition_error("cancel")),
        }
    }

    /// Record the write outcome and leave Committing.
    pub fn complete(&mut self, committed: P) -> Result<(), DomainError> {
        match self.state {
            TransactionState::Committing(_) => {
                self.state = TransactionState::Done(committed);
                Ok(())
            }
            _ => Err(self.transition_error("complete")),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        match self.state {
            TransactionState::Committing(_) => {
                self.state = TransactionState::Failed(reason.into());
                Ok(())
            }
            _ => Err(self.transition_error("fail")),
        }
    }

    fn transition_error(&self, action: &str) -> DomainError {
        DomainError::invalid_state_transition(format!(
            "cannot {} while {}",
            action,
            self.state.name()
        ))
    }
}

impl<P: Clone> SheetTransaction<P> {
    /// Move from Previewing to Committing, returning the previewed snapshot.
    pub fn confirm(&mut self) -> Result<P, DomainError> {
        match &self.state {
            TransactionState::Previewing(p) => {
                let snapshot = p.clone();
                self.state = TransactionState::Committing(snapshot.clone());
                Ok(snapshot)
            }
            _ => Err(self.transition_error("confirm")),
        }
    }
}
