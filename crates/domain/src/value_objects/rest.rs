//! Rest detection from host rest-completed payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Boolean fields that mark a long rest outright.
const LONG_REST_FLAGS: [&str; 2] = ["longRest", "isLongRest"];

/// String fields that may name the rest kind.
const REST_KIND_FIELDS: [&str; 3] = ["type", "restType", "kind"];

/// Rest type for resource recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestType {
    /// Short rest, or any rest whose kind can't be determined
    Short,
    /// Long rest (typically 8 hours)
    Long,
}

impl RestType {
    /// Classify a rest payload.
    ///
    /// A payload is a long rest if it carries `longRest: true` /
    /// `isLongRest: true`, or if `type`, `restType` or `kind` contains
    /// "long" in any case. Everything else is treated as short.
    pub fn detect(payload: &Value) -> Self {
        let flagged = LONG_REST_FLAGS
            .iter()
            .any(|key| payload.get(key).and_then(Value::as_bool) == Some(true));

        let named = REST_KIND_FIELDS
            .iter()
            .filter_map(|key| payload.get(key).and_then(Value::as_str))
            .any(|kind| kind.to_lowercase().contains("long"));

        if flagged || named {
            Self::Long
        } else {
            Self::Short
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }
}
