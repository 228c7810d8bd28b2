//! Willpower use case types.

use serde::{Deserialize, Serialize};

/// The viewing user's role at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Game master - may edit every sheet value
    Gm,
    Player,
}

impl UserRole {
    pub fn can_edit_willpower(&self) -> bool {
        matches!(self, Self::Gm)
    }
}
