//! Belly currency and the five standard coin denominations.
//!
//! Belly is the single bank-style unit. Every coin has a fixed Belly value,
//! so converting coins to Belly is a multiply-accumulate and converting Belly
//! to coins is a greedy decomposition from the largest coin down.
//!
//! The decomposition is greedy even though electrum does not divide gold
//! evenly into the chain (5,000 vs 10,000). It always produces a valid
//! breakdown, but not a guaranteed minimal coin count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{group_thousands, lenient_number};
use crate::error::DomainError;

/// Belly per gold piece, the headline exchange rate shown on the sheet.
pub const BELLY_PER_GP: u64 = 10_000;

/// Amount at which the Belly bar renders full when no cap is configured.
pub const DEFAULT_BELLY_CAP: u64 = 1_000_000;

/// Flag key holding the Belly total.
pub const BELLY_FLAG: &str = "belly";

/// Path of the coin purse on the actor record.
pub const CURRENCY_PATH: &str = "system.currency";

/// Standard coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Copper piece
    Cp,
    /// Silver piece
    Sp,
    /// Electrum piece
    Ep,
    /// Gold piece
    Gp,
    /// Platinum piece
    Pp,
}

impl Denomination {
    /// All denominations from the highest Belly value to the lowest.
    pub const DESCENDING: [Denomination; 5] = [Self::Pp, Self::Gp, Self::Ep, Self::Sp, Self::Cp];

    /// Belly value of a single coin.
    pub fn belly_rate(&self) -> u64 {
        match self {
            Self::Cp => 100,
            Self::Sp => 1_000,
            Self::Ep => 5_000,
            Self::Gp => 10_000,
            Self::Pp => 100_000,
        }
    }

    /// Returns the lowercase key used in host currency records (e.g., "gp").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cp => "cp",
            Self::Sp => "sp",
            Self::Ep => "ep",
            Self::Gp => "gp",
            Self::Pp => "pp",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Denomination {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cp" | "copper" => Ok(Self::Cp),
            "sp" | "silver" => Ok(Self::Sp),
            "ep" | "electrum" => Ok(Self::Ep),
            "gp" | "gold" => Ok(Self::Gp),
            "pp" | "platinum" => Ok(Self::Pp),
            _ => Err(DomainError::parse(format!("Unknown denomination: {}", s))),
        }
    }
}

/// Coin counts for each denomination. Counts are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSet {
    pub pp: u64,
    pub gp: u64,
    pub ep: u64,
    pub sp: u64,
    pub cp: u64,
}

impl CoinSet {
    /// An empty purse.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Read the coins from a host currency record (`{pp, gp, ep, sp, cp}`).
    ///
    /// Missing, negative or non-numeric counts read as zero; fractions are
    /// floored.
    pub fn from_host(currency: Option<&Value>) -> Self {
        let read = |denomination: Denomination| -> u64 {
            let n = lenient_number(currency.and_then(|c| c.get(denomination.as_str())));
            if n > 0.0 {
                n.floor() as u64
            } else {
                0
            }
        };

        Self {
            pp: read(Denomination::Pp),
            gp: read(Denomination::Gp),
            ep: read(Denomination::Ep),
            sp: read(Denomination::Sp),
            cp: read(Denomination::Cp),
        }
    }

    pub fn get(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::Pp => self.pp,
            Denomination::Gp => self.gp,
            Denomination::Ep => self.ep,
            Denomination::Sp => self.sp,
            Denomination::Cp => self.cp,
        }
    }

    pub fn with(mut self, denomination: Denomination, count: u64) -> Self {
        match denomination {
            Denomination::Pp => self.pp = count,
            Denomination::Gp => self.gp = count,
            Denomination::Ep => self.ep = count,
            Denomination::Sp => self.sp = count,
            Denomination::Cp => self.cp = count,
        }
        self
    }

    /// Total Belly value of these coins.
    pub fn belly_value(&self) -> BellyAmount {
        coins_to_belly(self)
    }

    /// Add another set of coins, denomination by denomination.
    pub fn saturating_add(&self, other: &CoinSet) -> CoinSet {
        Denomination::DESCENDING
            .iter()
            .fold(*self, |acc, d| acc.with(*d, acc.get(*d).saturating_add(other.get(*d))))
    }

    pub fn is_empty(&self) -> bool {
        Denomination::DESCENDING.iter().all(|d| self.get(*d) == 0)
    }

    /// Iterate `(denomination, count)` pairs from highest to lowest value.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::DESCENDING.iter().map(move |d| (*d, self.get(*d)))
    }
}

impl fmt::Display for CoinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pp:{} gp:{} ep:{} sp:{} cp:{}",
            self.pp, self.gp, self.ep, self.sp, self.cp
        )
    }
}

/// A non-negative amount of Belly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BellyAmount(u64);

impl BellyAmount {
    pub const ZERO: BellyAmount = BellyAmount(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Read a stored Belly total. Anything that is not a positive finite
    /// number reads as zero.
    pub fn from_lenient(value: Option<&Value>) -> Self {
        Self::from_f64(lenient_number(value))
    }

    /// Floor a raw amount, clamping negative and non-finite input to zero.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value.floor() as u64)
        } else {
            Self::ZERO
        }
    }

    pub fn saturating_add(self, other: BellyAmount) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: BellyAmount) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Apply a signed change, never going below zero.
    pub fn apply_delta(self, delta: i64) -> Self {
        if delta >= 0 {
            Self(self.0.saturating_add(delta.unsigned_abs()))
        } else {
            Self(self.0.saturating_sub(delta.unsigned_abs()))
        }
    }

    /// JSON form written back to the host.
    pub fn to_json(&self) -> Value {
        Value::from(self.0)
    }
}

impl fmt::Display for BellyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = i64::try_from(self.0).unwrap_or(i64::MAX);
        write!(f, "{}", group_thousands(shown))
    }
}

/// Result of decomposing Belly into coins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionBreakdown {
    pub coins: CoinSet,
    /// Belly too small to express as a copper piece (always < 100).
    pub remainder: u64,
}

impl ConversionBreakdown {
    /// The Belly that actually turns into coins (input minus remainder).
    pub fn convertible(&self) -> BellyAmount {
        self.coins.belly_value()
    }

    pub fn has_remainder(&self) -> bool {
        self.remainder > 0
    }
}

/// Total Belly value of a set of coins.
pub fn coins_to_belly(coins: &CoinSet) -> BellyAmount {
    let total = coins.iter().fold(0u64, |acc, (denomination, count)| {
        acc.saturating_add(count.saturating_mul(denomination.belly_rate()))
    });
    BellyAmount(total)
}

/// Greedy decomposition of Belly into coins, highest denomination first.
///
/// Whatever is left below one copper piece is reported as `remainder`.
pub fn belly_to_coins(amount: BellyAmount) -> ConversionBreakdown {
    let mut remaining = amount.value();
    let mut coins = CoinSet::zero();

    for denomination in Denomination::DESCENDING {
        let rate = denomination.belly_rate();
        let count = remaining / rate;
        remaining -= count * rate;
        coins = coins.with(denomination, count);
    }

    ConversionBreakdown {
        coins,
        remainder: remaining,
    }
}

/// [`belly_to_coins`] for a raw host value: negative, non-finite and
/// non-numeric input decomposes as zero.
pub fn belly_to_coins_lenient(amount: Option<&Value>) -> ConversionBreakdown {
    belly_to_coins(BellyAmount::from_lenient(amount))
}

/// Percentage of the Belly bar to fill, in `[0, 100]`. Visual only.
pub fn belly_fill_percent(belly: BellyAmount, cap: u64) -> f64 {
    let cap = cap.max(1) as f64;
    ((belly.value() as f64 / cap) * 100.0).clamp(0.0, 100.0)
}
