//! Hybrid Points - a level-scaled combat resource.
//!
//! The pool is capped by a step function of character level. Every read and
//! every write clamps the stored value into `[0, capacity]`, so a corrupted
//! record heals itself the next time it is touched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{clamp, get_path, lenient_int};

/// Flag key holding the canonical pool value.
pub const HYBRID_POINTS_FLAG: &str = "hybridPoints";

/// Capacity at the lowest tier (level 1 and below).
pub const MIN_CAPACITY: i64 = 2;

/// Capacity at the highest tier (level 16 and above).
pub const MAX_CAPACITY: i64 = 10;

/// `(highest level in tier, capacity)` pairs in ascending order.
const CAPACITY_TIERS: [(i64, i64); 8] = [
    (1, 2),
    (3, 3),
    (5, 4),
    (7, 5),
    (9, 6),
    (11, 7),
    (13, 8),
    (15, 9),
];

/// Pool capacity for a character level.
///
/// Non-decreasing in `level` and always within `[MIN_CAPACITY, MAX_CAPACITY]`.
pub fn capacity_for_level(level: i64) -> i64 {
    CAPACITY_TIERS
        .iter()
        .find(|(max_level, _)| level <= *max_level)
        .map(|(_, capacity)| *capacity)
        .unwrap_or(MAX_CAPACITY)
}

/// [`capacity_for_level`] for a raw host value. Non-numeric levels land in
/// the lowest tier.
pub fn capacity_for_level_value(level: Option<&Value>) -> i64 {
    capacity_for_level(lenient_int(level))
}

/// Clamp a stored pool value into `[0, capacity]`.
pub fn clamp_points(stored: Option<&Value>, capacity: i64) -> i64 {
    clamp(lenient_int(stored), 0, capacity)
}

/// The Hybrid Points pool of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridPoints {
    current: i64,
    capacity: i64,
}

impl HybridPoints {
    /// Build a pool at `level`, clamping `current` into range.
    pub fn new(current: i64, level: i64) -> Self {
        let capacity = capacity_for_level(level);
        Self {
            current: clamp(current, 0, capacity),
            capacity,
        }
    }

    /// Read a pool from its stored flag value.
    pub fn from_stored(stored: Option<&Value>, level: i64) -> Self {
        Self::new(lenient_int(stored), level)
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// The only mutation primitive: capacity is recomputed from `level` and
    /// `value` is clamped into it.
    pub fn set_absolute(&self, value: i64, level: i64) -> Self {
        Self::new(value, level)
    }

    pub fn adjust(&self, delta: i64, level: i64) -> Self {
        self.set_absolute(self.current.saturating_add(delta), level)
    }

    pub fn reset(&self, level: i64) -> Self {
        self.set_absolute(0, level)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// The generic resource slot mirroring this pool.
    pub fn to_slot(&self, label: &str) -> ResourceSlot {
        ResourceSlot {
            label: label.to_string(),
            value: self.current,
            max: self.capacity,
        }
    }
}

impl fmt::Display for HybridPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.capacity)
    }
}

/// A generic `{label, value, max}` resource on the host sheet.
///
/// Combat automation reads the pool through this slot rather than through
/// the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSlot {
    pub label: String,
    pub value: i64,
    pub max: i64,
}

impl ResourceSlot {
    /// Read a slot from the host record, coercing each field.
    pub fn from_host(slot: Option<&Value>) -> Self {
        let label = slot
            .and_then(|s| s.get("label"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            label,
            value: lenient_int(slot.and_then(|s| s.get("value"))),
            max: lenient_int(slot.and_then(|s| s.get("max"))),
        }
    }
}

/// A requested change to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HybridPointsChange {
    /// Add (or with a negative value, spend) points.
    Adjust(i64),
    /// Set an absolute value.
    Set(i64),
    /// Empty the pool.
    Reset,
}

impl HybridPointsChange {
    pub fn apply(&self, pool: &HybridPoints, level: i64) -> HybridPoints {
        match self {
            Self::Adjust(delta) => pool.adjust(*delta, level),
            Self::Set(value) => pool.set_absolute(*value, level),
            Self::Reset => pool.reset(level),
        }
    }
}

impl fmt::Display for HybridPointsChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adjust(delta) if *delta >= 0 => write!(f, "+{}", delta),
            Self::Adjust(delta) => write!(f, "{}", delta),
            Self::Set(value) => write!(f, "set to {}", value),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// Prospective pool state after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridPointsProposal {
    pub before: HybridPoints,
    pub change: HybridPointsChange,
    pub after: HybridPoints,
}

impl HybridPointsProposal {
    pub fn compute(before: HybridPoints, change: HybridPointsChange, level: i64) -> Self {
        Self {
            before,
            change,
            after: change.apply(&before, level),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

impl fmt::Display for HybridPointsProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hybrid Points: {} -> {} ({})",
            self.before, self.after, self.change
        )
    }
}

/// How an attack resolved, as reported by combat automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

impl AttackOutcome {
    /// Read an attack workflow payload.
    ///
    /// `isCritical: true` is a critical; a non-empty `hitTargets` list (or
    /// count) or `hit: true` is a hit; anything else is a miss.
    pub fn from_workflow(payload: &Value) -> Self {
        if payload.get("isCritical").and_then(Value::as_bool) == Some(true) {
            return Self::Critical;
        }

        let hit_targets = match get_path(payload, "hitTargets") {
            Some(Value::Array(targets)) => !targets.is_empty(),
            Some(Value::Object(targets)) => targets
                .get("size")
                .map(|size| lenient_int(Some(size)) > 0)
                .unwrap_or(!targets.is_empty()),
            Some(other) => lenient_int(Some(other)) > 0,
            None => false,
        };
        let flagged = payload.get("hit").and_then(Value::as_bool) == Some(true);

        if hit_targets || flagged {
            Self::Hit
        } else {
            Self::Miss
        }
    }
}
