//! Recursive merge of a snapshot into a default shape.

use serde_json::{Map, Value};

/// Merge `overlay` into `base`, returning a new value.
///
/// - A non-object `overlay` (null, array, string, number, bool) replaces
///   `base` entirely.
/// - An object `overlay` starts from a shallow copy of `base`'s entries and
///   sets every overlay key to `deep_merge(base[key] or {}, overlay[key])`.
///
/// Arrays are never merged element-wise. Keys present only in `overlay` are
/// kept, so unknown fields survive reconciliation. Neither input is mutated.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let overlay = match overlay {
        Value::Object(map) => map,
        other => return other.clone(),
    };

    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    let empty = Value::Object(Map::new());
    for (key, value) in overlay {
        let base_value = merged.get(key).unwrap_or(&empty);
        let next = deep_merge(base_value, value);
        merged.insert(key.clone(), next);
    }

    Value::Object(merged)
}

/// Truthiness of a snapshot value as the editor's load path tests it.
///
/// Null, `false`, numeric zero and the empty string are falsy. Objects and
/// arrays are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
