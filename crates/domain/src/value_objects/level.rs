//! Character level discovery across host schema versions.
//!
//! The host stores the total level in different places depending on its
//! version and configuration. A [`LevelResolver`] tries an ordered list of
//! [`LevelStrategy`] probes and takes the first that yields a number.

use serde_json::Value;

use crate::common::{finite_number, floor_to_int, get_path, lenient_number};

/// Path of the total character level on the actor record.
pub const DETAILS_LEVEL_PATH: &str = "system.details.level";

/// Path of the class map on the actor record.
pub const CLASSES_PATH: &str = "system.classes";

/// Alternate field names a class entry may store its level under.
const CLASS_LEVEL_FIELDS: [&str; 3] = ["levels", "system.levels", "level"];

/// One way of reading a character level out of an actor record.
pub trait LevelStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The level, or `None` if this record doesn't have the expected shape.
    fn resolve(&self, record: &Value) -> Option<i64>;
}

/// `system.details.level` as a plain number.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectLevel;

impl LevelStrategy for DirectLevel {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn resolve(&self, record: &Value) -> Option<i64> {
        finite_number(get_path(record, DETAILS_LEVEL_PATH)).map(floor_to_int)
    }
}

/// `system.details.level.value` for schemas that wrap the level.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedLevelValue;

impl LevelStrategy for NestedLevelValue {
    fn name(&self) -> &'static str {
        "nested_value"
    }

    fn resolve(&self, record: &Value) -> Option<i64> {
        let path = format!("{DETAILS_LEVEL_PATH}.value");
        finite_number(get_path(record, &path)).map(floor_to_int)
    }
}

/// Sum of the per-class levels in `system.classes`.
///
/// Each class may expose its level as `levels`, `system.levels` or `level`;
/// the first present field wins and anything non-numeric counts as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassLevelSum;

impl ClassLevelSum {
    fn class_level(class: &Value) -> f64 {
        let field = CLASS_LEVEL_FIELDS
            .iter()
            .filter_map(|path| get_path(class, path))
            .find(|value| !value.is_null());
        lenient_number(field)
    }
}

impl LevelStrategy for ClassLevelSum {
    fn name(&self) -> &'static str {
        "class_sum"
    }

    fn resolve(&self, record: &Value) -> Option<i64> {
        let classes = get_path(record, CLASSES_PATH)?.as_object()?;
        let total: f64 = classes.values().map(Self::class_level).sum();
        Some(floor_to_int(total))
    }
}

/// Ordered list of level probes; first success wins.
pub struct LevelResolver {
    strategies: Vec<Box<dyn LevelStrategy>>,
}

impl Default for LevelResolver {
    fn default() -> Self {
        Self::dnd5e()
    }
}

impl LevelResolver {
    /// Probes for the dnd5e actor schema: direct, nested, class sum.
    pub fn dnd5e() -> Self {
        Self::with_strategies(vec![
            Box::new(DirectLevel),
            Box::new(NestedLevelValue),
            Box::new(ClassLevelSum),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn LevelStrategy>>) -> Self {
        Self { strategies }
    }

    /// The first level any probe finds, with the probe's name.
    pub fn resolve_with_source(&self, record: &Value) -> Option<(i64, &'static str)> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.resolve(record).map(|level| (level, strategy.name())))
    }

    /// The character level, or `0` when no probe matches.
    pub fn resolve(&self, record: &Value) -> i64 {
        self.resolve_with_source(record)
            .map(|(level, _)| level)
            .unwrap_or(0)
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_level_wins_first() {
        let record = json!({
            "system": {
                "details": {"level": 7},
                "classes": {"fighter": {"levels": 2}}
            }
        });
        assert_eq!(LevelResolver::dnd5e().resolve_with_source(&record), Some((7, "direct")));
    }

    #[test]
    fn nested_value_is_second() {
        let record = json!({"system": {"details": {"level": {"value": 4}}}});
        assert_eq!(
            LevelResolver::dnd5e().resolve_with_source(&record),
            Some((4, "nested_value"))
        );
    }

    #[test]
    fn class_levels_are_summed() {
        let record = json!({
            "system": {
                "details": {"level": "not a number"},
                "classes": {
                    "fighter": {"levels": 5},
                    "rogue": {"system": {"levels": 4}}
                }
            }
        });
        assert_eq!(
            LevelResolver::dnd5e().resolve_with_source(&record),
            Some((9, "class_sum"))
        );
    }

    #[test]
    fn class_level_field_fallbacks() {
        let record = json!({
            "system": {
                "classes": {
                    "a": {"level": 2},
                    "b": {"levels": null, "level": "3"},
                    "c": {"levels": "junk"},
                    "d": {}
                }
            }
        });
        assert_eq!(LevelResolver::dnd5e().resolve(&record), 5);
    }

    #[test]
    fn missing_everything_is_zero() {
        assert_eq!(LevelResolver::dnd5e().resolve(&json!({})), 0);
        assert_eq!(LevelResolver::dnd5e().resolve(&json!(null)), 0);
        assert_eq!(
            LevelResolver::dnd5e().resolve(&json!({"system": {"classes": []}})),
            0
        );
    }

    #[test]
    fn custom_strategy_order() {
        struct Fixed;
        impl LevelStrategy for Fixed {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn resolve(&self, _record: &Value) -> Option<i64> {
                Some(12)
            }
        }

        let resolver = LevelResolver::with_strategies(vec![Box::new(Fixed), Box::new(DirectLevel)]);
        let record = json!({"system": {"details": {"level": 3}}});
        assert_eq!(resolver.resolve(&record), 12);
        assert_eq!(resolver.strategy_names(), vec!["fixed", "direct"]);
    }
}
