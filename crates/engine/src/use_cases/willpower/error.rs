//! Willpower operation errors.

use crate::infrastructure::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum WillpowerError {
    #[error("Only the GM can change the Willpower bonus")]
    NotAuthorized,
    #[error("Host error: {0}")]
    Port(#[from] PortError),
}
