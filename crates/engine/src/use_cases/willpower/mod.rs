//! Willpower use cases.
//!
//! Willpower is the character level plus a GM-assigned bonus.

use std::sync::Arc;

mod error;
mod get_willpower;
mod roll_data;
mod set_bonus;
mod types;

pub use error::WillpowerError;
pub use get_willpower::GetWillpower;
pub use roll_data::WillpowerRollData;
pub use set_bonus::SetWillpowerBonus;
pub use types::UserRole;

/// Container for Willpower use cases.
pub struct WillpowerUseCases {
    pub get: Arc<GetWillpower>,
    pub set_bonus: Arc<SetWillpowerBonus>,
    pub roll_data: Arc<WillpowerRollData>,
}

impl WillpowerUseCases {
    pub fn new(
        get: Arc<GetWillpower>,
        set_bonus: Arc<SetWillpowerBonus>,
        roll_data: Arc<WillpowerRollData>,
    ) -> Self {
        Self {
            get,
            set_bonus,
            roll_data,
        }
    }
}
