//! Set-union merge for permission rule lists.

use super::generic::unique;
use serde_json::Value;

/// Buckets merged by set-union. Other keys are left as the target has them.
pub const PERMISSION_BUCKETS: [&str; 2] = ["allow", "deny"];

/// Merge two permission sets.
///
/// For each bucket defined by `source`, the result holds the union of both
/// sides in first-seen order with duplicates removed. A bucket missing from
/// `source` (or set to `null`) is left untouched, never deleted. Non-object
/// inputs count as empty sets.
pub fn merge_permissions(target: &Value, source: &Value) -> Value {
    let mut result = target.as_object().cloned().unwrap_or_default();
    let Some(source_map) = source.as_object() else {
        return Value::Object(result);
    };

    for bucket in PERMISSION_BUCKETS {
        let Some(source_rules) = source_map.get(bucket).filter(|v| !v.is_null()) else {
            continue;
        };
        let merged = match source_rules {
            Value::Array(rules) => union(result.get(bucket), rules),
            other => other.clone(),
        };
        result.insert(bucket.to_string(), merged);
    }
    Value::Object(result)
}

fn union(existing: Option<&Value>, rules: &[Value]) -> Value {
    let existing = existing
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    Value::Array(unique(existing.iter().chain(rules)))
}
