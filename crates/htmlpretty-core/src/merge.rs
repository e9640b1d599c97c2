//! Generic deep merge over JSON-like values.

use serde_json::{Map, Value};

use crate::{ConfigError, Result};

/// Recursively merge `updates` into a copy of `current`.
///
/// - Arrays concatenate: the result is a fresh copy of `current` with the
///   elements of `updates` appended (a non-array `updates` is appended as a
///   single element).
/// - Objects merge key by key: a non-object update value overwrites, an
///   object value recurses into the existing value at that key (or an empty
///   object when the key is missing).
/// - `current` is never mutated, and the returned value shares no structure
///   with it.
///
/// Merging onto a scalar `current` just clones it; callers only exercise the
/// array and object branches.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidArgument`] when either operand is null.
pub fn merge(current: &Value, updates: &Value) -> Result<Value> {
    if current.is_null() || updates.is_null() {
        return Err(ConfigError::InvalidArgument);
    }

    Ok(match current {
        Value::Array(items) => {
            let mut merged = items.clone();
            match updates {
                Value::Array(extra) => merged.extend(extra.iter().cloned()),
                other => merged.push(other.clone()),
            }
            Value::Array(merged)
        }
        Value::Object(fields) => {
            let mut merged = fields.clone();
            if let Value::Object(changes) = updates {
                for (key, value) in changes {
                    if value.is_object() {
                        let base = merged
                            .remove(key)
                            .unwrap_or_else(|| Value::Object(Map::new()));
                        merged.insert(key.clone(), merge(&base, value)?);
                    } else {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(merged)
        }
        scalar => scalar.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arrays_concatenate() {
        let merged = merge(&json!([1, 2]), &json!([3])).unwrap();
        assert_eq!(merged, json!([1, 2, 3]));
    }

    #[test]
    fn test_array_gains_single_value() {
        let merged = merge(&json!(["a"]), &json!("b")).unwrap();
        assert_eq!(merged, json!(["a", "b"]));
    }

    #[test]
    fn test_object_overwrites_scalar_keys() {
        let merged = merge(
            &json!({ "tab_size": 4, "strict": false }),
            &json!({ "tab_size": 2 }),
        )
        .unwrap();
        assert_eq!(merged, json!({ "tab_size": 2, "strict": false }));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let merged = merge(
            &json!({ "outer": { "a": 1, "b": 2 } }),
            &json!({ "outer": { "b": 3, "c": 4 } }),
        )
        .unwrap();
        assert_eq!(merged, json!({ "outer": { "a": 1, "b": 3, "c": 4 } }));
    }

    #[test]
    fn test_missing_nested_container_defaults_to_empty_object() {
        let merged = merge(&json!({}), &json!({ "outer": { "a": 1 } })).unwrap();
        assert_eq!(merged, json!({ "outer": { "a": 1 } }));
    }

    #[test]
    fn test_current_is_never_mutated() {
        let current = json!({ "list": [1], "nested": { "a": 1 } });
        let snapshot = current.clone();

        let mut merged = merge(&current, &json!({ "nested": { "b": 2 } })).unwrap();
        merged["list"].as_array_mut().unwrap().push(json!(99));
        merged["nested"]["a"] = json!(0);

        assert_eq!(current, snapshot);
    }

    #[test]
    fn test_null_operands_are_rejected() {
        assert!(matches!(
            merge(&Value::Null, &json!({})),
            Err(ConfigError::InvalidArgument)
        ));
        assert!(matches!(
            merge(&json!({}), &Value::Null),
            Err(ConfigError::InvalidArgument)
        ));
    }
}
