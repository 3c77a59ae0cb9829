//! Recursive merge for keys without domain-specific rules.

use super::classify::{Disposition, classify};
use super::hooks::merge_hooks;
use super::permissions::merge_permissions;
use serde_json::{Map, Value};

/// Deep merge `source` into `target`, returning a new tree.
///
/// - A non-object source cannot be merged into anything: `target` is returned
/// - A non-object target is replaced by `source` entirely
/// - Otherwise every source key is folded in according to [`classify`];
///   keys only present in `target` are kept in place
///
/// # Example
/// ```
/// use serde_json::json;
/// use preset_merge::merge::deep_merge;
///
/// let base = json!({"timeout": 30, "tags": ["x", "y"]});
/// let preset = json!({"timeout": 60, "tags": ["y", "z"]});
/// let result = deep_merge(&base, &preset);
/// assert_eq!(result, json!({"timeout": 60, "tags": ["x", "y", "z"]}));
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let Value::Object(source_map) = source else {
        return target.clone();
    };
    let Value::Object(target_map) = target else {
        return source.clone();
    };

    let mut result = target_map.clone();
    for (key, source_value) in source_map {
        let existing = result.get(key);
        let merged = match classify(key, existing, source_value) {
            Disposition::ReservedPermissions => {
                merge_permissions(existing.unwrap_or(&empty_object()), source_value)
            }
            Disposition::ReservedHooks => {
                merge_hooks(existing.unwrap_or(&empty_object()), source_value)
            }
            Disposition::DedupConcat => match source_value {
                Value::Array(items) => dedup_concat(existing.unwrap_or(&Value::Null), items),
                other => other.clone(),
            },
            Disposition::RecurseObject => match existing {
                Some(existing @ Value::Object(_)) => deep_merge(existing, source_value),
                // Scalar, list or missing target: merge into an empty object
                _ => deep_merge(&empty_object(), source_value),
            },
            Disposition::Overwrite => source_value.clone(),
        };
        result.insert(key.clone(), merged);
    }
    Value::Object(result)
}

/// Concatenate `target` and `source`, keeping only the first occurrence of
/// each element (deep equality). A non-array target counts as empty.
pub fn dedup_concat(target: &Value, source: &[Value]) -> Value {
    let existing = target.as_array().map(Vec::as_slice).unwrap_or_default();
    Value::Array(unique(existing.iter().chain(source)))
}

/// Collect values in order, skipping any already seen.
///
/// `Value` is not `Hash`, so each element is checked against the kept
/// ones: quadratic in list length, which stays small for settings lists.
pub(crate) fn unique<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

pub(crate) fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_overwrite() {
        let result = deep_merge(&json!({"timeout": 30}), &json!({"timeout": 60}));
        assert_eq!(result, json!({"timeout": 60}));
    }

    #[test]
    fn test_generic_dedup_concat() {
        let result = deep_merge(&json!({"tags": ["x", "y"]}), &json!({"tags": ["y", "z"]}));
        assert_eq!(result, json!({"tags": ["x", "y", "z"]}));
    }

    #[test]
    fn test_dedup_uses_deep_equality() {
        let result = deep_merge(
            &json!({"servers": [{"name": "a", "port": 1}]}),
            &json!({"servers": [{"name": "a", "port": 1}, {"name": "a", "port": 2}]}),
        );
        assert_eq!(
            result,
            json!({"servers": [{"name": "a", "port": 1}, {"name": "a", "port": 2}]})
        );
    }

    #[test]
    fn test_nested_objects_recurse() {
        let base = json!({
            "env": {"EDITOR": "vim", "PAGER": "less"},
            "model": "default"
        });
        let preset = json!({
            "env": {"EDITOR": "nano", "LANG": "C"}
        });
        let result = deep_merge(&base, &preset);
        assert_eq!(
            result,
            json!({
                "env": {"EDITOR": "nano", "PAGER": "less", "LANG": "C"},
                "model": "default"
            })
        );
    }

    #[test]
    fn test_target_only_keys_retained() {
        let result = deep_merge(&json!({"a": 1, "b": [1]}), &json!({"c": true}));
        assert_eq!(result, json!({"a": 1, "b": [1], "c": true}));
    }

    #[test]
    fn test_non_object_source_keeps_target() {
        let base = json!({"a": 1});
        assert_eq!(deep_merge(&base, &json!("text")), base);
        assert_eq!(deep_merge(&base, &json!(null)), base);
        assert_eq!(deep_merge(&base, &json!([1, 2])), base);
    }

    #[test]
    fn test_non_object_target_replaced() {
        let preset = json!({"a": 1});
        assert_eq!(deep_merge(&json!(5), &preset), preset);
        assert_eq!(deep_merge(&json!(null), &preset), preset);
        assert_eq!(deep_merge(&json!(["x"]), &preset), preset);
    }

    #[test]
    fn test_object_replaces_scalar_field() {
        let result = deep_merge(&json!({"value": 42}), &json!({"value": {"nested": true}}));
        assert_eq!(result, json!({"value": {"nested": true}}));
    }

    #[test]
    fn test_object_replaces_null_and_list_fields() {
        let result = deep_merge(
            &json!({"a": null, "b": [1, 2]}),
            &json!({"a": {"x": 1}, "b": {"y": 2}}),
        );
        assert_eq!(result, json!({"a": {"x": 1}, "b": {"y": 2}}));
    }

    #[test]
    fn test_scalar_replaces_object_field() {
        let result = deep_merge(&json!({"value": {"nested": true}}), &json!({"value": 42}));
        assert_eq!(result, json!({"value": 42}));
    }

    #[test]
    fn test_null_overwrites() {
        let result = deep_merge(&json!({"value": 100}), &json!({"value": null}));
        assert!(result["value"].is_null());
    }

    #[test]
    fn test_list_over_scalar_field() {
        let result = deep_merge(&json!({"tags": "x"}), &json!({"tags": ["y", "y"]}));
        assert_eq!(result, json!({"tags": ["y"]}));
    }

    #[test]
    fn test_scalar_over_list_field() {
        let result = deep_merge(&json!({"tags": ["x"]}), &json!({"tags": "y"}));
        assert_eq!(result, json!({"tags": "y"}));
    }

    #[test]
    fn test_reserved_keys_nested() {
        let base = json!({"profile": {"permissions": {"allow": ["Read"]}}});
        let preset = json!({"profile": {"permissions": {"allow": ["Read", "Edit"]}}});
        let result = deep_merge(&base, &preset);
        assert_eq!(
            result,
            json!({"profile": {"permissions": {"allow": ["Read", "Edit"]}}})
        );
    }

    #[test]
    fn test_key_order_target_then_new_source_keys() {
        let result = deep_merge(&json!({"b": 1, "a": 2}), &json!({"c": 3, "a": 4}));
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let base = json!({"tags": ["x"], "env": {"A": "1"}});
        let preset = json!({"tags": ["y"], "env": {"B": "2"}});
        let base_before = base.clone();
        let preset_before = preset.clone();
        let _ = deep_merge(&base, &preset);
        assert_eq!(base, base_before);
        assert_eq!(preset, preset_before);
    }

    #[test]
    fn test_dedup_concat_non_array_target() {
        assert_eq!(
            dedup_concat(&json!({"x": 1}), &[json!(1), json!(1), json!(2)]),
            json!([1, 2])
        );
    }
}
