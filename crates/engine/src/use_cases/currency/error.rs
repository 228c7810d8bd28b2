//! Currency operation errors.

use crate::infrastructure::ports::PortError;
use onepiece_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    #[error("Transaction error: {0}")]
    Domain(#[from] DomainError),
    #[error("Host error: {0}")]
    Port(#[from] PortError),
}
