//! Dotted-path access into JSON records (`system.details.level`).

use serde_json::{Map, Value};

/// Look up a dotted path inside a record.
///
/// Array segments are addressed by index. Returns `None` as soon as a segment
/// is missing or the node is not a container.
///
/// # Examples
///
/// ```
/// use onepiece_domain::common::get_path;
/// use serde_json::json;
///
/// let record = json!({"system": {"details": {"level": 5}}});
/// assert_eq!(get_path(&record, "system.details.level"), Some(&json!(5)));
/// assert_eq!(get_path(&record, "system.currency.gp"), None);
/// ```
pub fn get_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(record);
    }

    path.split('.').try_fold(record, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Write `value` at a dotted path, creating intermediate objects.
///
/// Any non-object node along the path is replaced by an empty object.
pub fn set_path(record: &mut Value, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut node = record;

    while let Some(segment) = segments.next() {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Value::Object(map) = node else {
            return;
        };

        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }

        node = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}
