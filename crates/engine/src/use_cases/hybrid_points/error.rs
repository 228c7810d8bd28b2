//! Hybrid Points operation errors.

use crate::infrastructure::ports::PortError;
use onepiece_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum HybridPointsError {
    #[error("Hybrid Points are disabled")]
    Disabled,
    #[error("Transaction error: {0}")]
    Domain(#[from] DomainError),
    #[error("Host error: {0}")]
    Port(#[from] PortError),
}
