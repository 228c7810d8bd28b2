//! Prospective outcomes of currency operations.
//!
//! Each proposal is computed purely from the current Belly total, the current
//! coins and the user's intent. The engine previews a proposal, then
//! recomputes it against fresh state when the user confirms.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::currency::{belly_to_coins, BellyAmount, CoinSet, ConversionBreakdown};

/// Coins turned into Belly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinsToBellyProposal {
    pub current_belly: BellyAmount,
    pub current_coins: CoinSet,
    pub gained: BellyAmount,
    pub zero_coins: bool,
    pub new_belly: BellyAmount,
    pub new_coins: CoinSet,
}

impl CoinsToBellyProposal {
    /// Convert the whole purse. When `zero_coins` is false the coins are left
    /// in place and the Belly is still credited.
    pub fn compute(current_belly: BellyAmount, current_coins: CoinSet, zero_coins: bool) -> Self {
        let gained = current_coins.belly_value();
        let new_coins = if zero_coins {
            CoinSet::zero()
        } else {
            current_coins
        };

        Self {
            current_belly,
            current_coins,
            gained,
            zero_coins,
            new_belly: current_belly.saturating_add(gained),
            new_coins,
        }
    }

    /// Whether committing would change anything.
    pub fn is_noop(&self) -> bool {
        self.new_belly == self.current_belly && self.new_coins == self.current_coins
    }
}

impl fmt::Display for CoinsToBellyProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Current: Belly {} | {}",
            self.current_belly, self.current_coins
        )?;
        writeln!(f, "Change: +{} Belly", self.gained)?;
        write!(f, "Result: Belly {} | {}", self.new_belly, self.new_coins)
    }
}

/// Belly turned back into coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellyToCoinsProposal {
    pub current_belly: BellyAmount,
    pub current_coins: CoinSet,
    /// Requested amount after clamping into `[0, current_belly]`.
    pub amount: BellyAmount,
    pub breakdown: ConversionBreakdown,
    pub new_belly: BellyAmount,
    pub new_coins: CoinSet,
}

impl BellyToCoinsProposal {
    /// Convert `requested` Belly (all of it when `None` or non-finite).
    ///
    /// The remainder below one copper piece stays as Belly.
    pub fn compute(
        current_belly: BellyAmount,
        current_coins: CoinSet,
        requested: Option<f64>,
    ) -> Self {
        let amount = resolve_requested_amount(current_belly, requested);
        let breakdown = belly_to_coins(amount);

        Self {
            current_belly,
            current_coins,
            amount,
            breakdown,
            new_belly: current_belly.saturating_sub(breakdown.convertible()),
            new_coins: current_coins.saturating_add(&breakdown.coins),
        }
    }

    pub fn convertible(&self) -> BellyAmount {
        self.breakdown.convertible()
    }

    pub fn is_noop(&self) -> bool {
        self.convertible() == BellyAmount::ZERO
    }
}

impl fmt::Display for BellyToCoinsProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Current: Belly {} | {}",
            self.current_belly, self.current_coins
        )?;
        write!(f, "Converted: {} Belly", self.convertible())?;
        if self.breakdown.has_remainder() {
            write!(f, " ({} stays as Belly)", self.breakdown.remainder)?;
        }
        writeln!(f)?;
        let gained = self.breakdown.coins;
        writeln!(
            f,
            "Coins gained: pp:+{} gp:+{} ep:+{} sp:+{} cp:+{}",
            gained.pp, gained.gp, gained.ep, gained.sp, gained.cp
        )?;
        write!(f, "Result: Belly {} | {}", self.new_belly, self.new_coins)
    }
}

/// A direct change to the Belly total (rewards, purchases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellyAdjustmentProposal {
    pub current: BellyAmount,
    pub delta: i64,
    pub new: BellyAmount,
}

impl BellyAdjustmentProposal {
    /// Spending more than the total leaves zero.
    pub fn compute(current: BellyAmount, delta: i64) -> Self {
        Self {
            current,
            delta,
            new: current.apply_delta(delta),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.new == self.current
    }
}

impl fmt::Display for BellyAdjustmentProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.delta >= 0 { "+" } else { "-" };
        let magnitude = BellyAmount::new(self.delta.unsigned_abs());
        writeln!(f, "Current: Belly {}", self.current)?;
        writeln!(f, "Change: {}{} Belly", sign, magnitude)?;
        write!(f, "Result: Belly {}", self.new)
    }
}

/// Clamp a requested conversion amount into `[0, available]`.
///
/// `None` and non-finite requests mean "everything available".
pub fn resolve_requested_amount(available: BellyAmount, requested: Option<f64>) -> BellyAmount {
    match requested.filter(|n| n.is_finite()) {
        None => available,
        Some(n) => BellyAmount::from_f64(n).min(available),
    }
}
