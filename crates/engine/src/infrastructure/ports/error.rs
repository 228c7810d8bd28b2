//! Error types for host port operations.

use onepiece_domain::ActorId;

/// Host document operation errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The host has no actor with this ID.
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The host refused or failed a document operation.
    #[error("Host rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },
}

impl PortError {
    pub fn not_found(actor_id: ActorId) -> Self {
        Self::ActorNotFound(actor_id)
    }

    /// Create a Rejected error with operation context.
    pub fn rejected(operation: &'static str, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActorNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_names_the_operation() {
        let err = PortError::rejected("set_fields", "document locked");
        assert_eq!(err.to_string(), "Host rejected set_fields: document locked");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detectable() {
        assert!(PortError::not_found(ActorId::new()).is_not_found());
    }
}
