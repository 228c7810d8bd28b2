//! Module settings loaded from the environment.
//!
//! # Environment Variables
//!
//! - `ONEPIECE_NAMESPACE` - Flag namespace on actor documents
//!   (default: `one-piece-supplement-module`)
//! - `ONEPIECE_BELLY_CAP` - Belly total that fills the bar (default: 1000000)
//! - `ONEPIECE_HYBRID_POINTS_ENABLED` - Enable the Hybrid Points pool (default: true)
//! - `ONEPIECE_HYBRID_POINTS_PER_HIT` - Points awarded per attack hit (default: 1)
//! - `ONEPIECE_HYBRID_POINTS_PER_CRIT` - Extra points awarded per critical (default: 1)
//! - `ONEPIECE_RESOURCE_SLOT` - Record path of the mirrored resource slot
//!   (default: `system.resources.tertiary`)
//! - `ONEPIECE_RESOURCE_LABEL` - Label written into that slot (default: `Hybrid Points`)

use onepiece_domain::DEFAULT_BELLY_CAP;
use serde::{Deserialize, Serialize};

/// Flag namespace the add-on stores its values under.
pub const MODULE_NAMESPACE: &str = "one-piece-supplement-module";

pub const DEFAULT_RESOURCE_SLOT: &str = "system.resources.tertiary";
pub const DEFAULT_RESOURCE_LABEL: &str = "Hybrid Points";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    pub namespace: String,
    pub belly_cap: u64,
    pub hybrid_points_enabled: bool,
    pub hybrid_points_per_hit: i64,
    /// Awarded on top of the hit award when the attack is a critical.
    pub hybrid_points_per_crit: i64,
    pub resource_slot_path: String,
    pub resource_slot_label: String,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            namespace: MODULE_NAMESPACE.to_string(),
            belly_cap: DEFAULT_BELLY_CAP,
            hybrid_points_enabled: true,
            hybrid_points_per_hit: 1,
            hybrid_points_per_crit: 1,
            resource_slot_path: DEFAULT_RESOURCE_SLOT.to_string(),
            resource_slot_label: DEFAULT_RESOURCE_LABEL.to_string(),
        }
    }
}

impl ModuleSettings {
    /// Load settings from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup. Missing or
    /// unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let env_or = |key: &str, default: String| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            namespace: env_or("ONEPIECE_NAMESPACE", defaults.namespace),
            belly_cap: parse_or(&lookup, "ONEPIECE_BELLY_CAP", defaults.belly_cap).max(1),
            hybrid_points_enabled: parse_or(
                &lookup,
                "ONEPIECE_HYBRID_POINTS_ENABLED",
                defaults.hybrid_points_enabled,
            ),
            hybrid_points_per_hit: parse_or(
                &lookup,
                "ONEPIECE_HYBRID_POINTS_PER_HIT",
                defaults.hybrid_points_per_hit,
            ),
            hybrid_points_per_crit: parse_or(
                &lookup,
                "ONEPIECE_HYBRID_POINTS_PER_CRIT",
                defaults.hybrid_points_per_crit,
            ),
            resource_slot_path: env_or("ONEPIECE_RESOURCE_SLOT", defaults.resource_slot_path),
            resource_slot_label: env_or("ONEPIECE_RESOURCE_LABEL", defaults.resource_slot_label),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
