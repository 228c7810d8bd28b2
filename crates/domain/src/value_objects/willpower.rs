//! Willpower - character level plus a GM-assigned bonus.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::common::lenient_int;

/// Flag key holding the manual Willpower bonus.
pub const WILLPOWER_BONUS_FLAG: &str = "willpowerBonus";

/// Key under which Willpower is exposed to roll formulas (`@willpower.total`).
pub const WILLPOWER_ROLL_KEY: &str = "willpower";

/// Read the stored bonus, defaulting to zero.
pub fn resolve_bonus(stored: Option<&Value>) -> i64 {
    lenient_int(stored)
}

/// Derived Willpower stat. `total` is always `base + bonus`; a negative bonus
/// can push the total below the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Willpower {
    base: i64,
    bonus: i64,
    total: i64,
}

impl Willpower {
    pub fn new(base: i64, bonus: i64) -> Self {
        Self {
            base,
            bonus,
            total: base.saturating_add(bonus),
        }
    }

    /// Character level the stat is derived from.
    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn with_bonus(&self, bonus: i64) -> Self {
        Self::new(self.base, bonus)
    }

    /// Bonus with an explicit sign (`+2`, `-1`, `+0`).
    pub fn signed_bonus(&self) -> String {
        if self.bonus >= 0 {
            format!("+{}", self.bonus)
        } else {
            self.bonus.to_string()
        }
    }

    /// Object exposed to roll formulas as `@willpower.level`,
    /// `@willpower.bonus` and `@willpower.total`.
    pub fn roll_data(&self) -> Value {
        json!({
            "level": self.base,
            "bonus": self.bonus,
            "total": self.total,
        })
    }

    /// Tooltip describing where the total comes from.
    pub fn formula_hint(&self) -> String {
        format!(
            "@willpower.total (Level {} + Bonus {})",
            self.base,
            self.signed_bonus()
        )
    }
}

impl fmt::Display for Willpower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {} \u{2022} Bonus {})",
            self.total,
            self.base,
            self.signed_bonus()
        )
    }
}
