//! Currency use cases.
//!
//! Converts between the coin purse and the Belly total, and adjusts the Belly
//! total directly. Each one is a [`SheetOperation`] so it can be previewed
//! before it is committed.
//!
//! [`SheetOperation`]: crate::use_cases::transaction::SheetOperation

use std::sync::Arc;

mod add_belly;
mod belly_to_coins;
mod coins_to_belly;
mod error;

pub use add_belly::AddBelly;
pub use belly_to_coins::{BellyToCoinsInput, ConvertBellyToCoins};
pub use coins_to_belly::{CoinsToBellyInput, ConvertCoinsToBelly};
pub use error::CurrencyError;

/// Container for currency use cases.
pub struct CurrencyUseCases {
    pub coins_to_belly: Arc<ConvertCoinsToBelly>,
    pub belly_to_coins: Arc<ConvertBellyToCoins>,
    pub add_belly: Arc<AddBelly>,
}

impl CurrencyUseCases {
    pub fn new(
        coins_to_belly: Arc<ConvertCoinsToBelly>,
        belly_to_coins: Arc<ConvertBellyToCoins>,
        add_belly: Arc<AddBelly>,
    ) -> Self {
        Self {
            coins_to_belly,
            belly_to_coins,
            add_belly,
        }
    }
}
