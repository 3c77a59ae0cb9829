//! Matcher-keyed merge for event-hook registries.
//!
//! A registry maps a hook type (event name) to a list of groups:
//!
//! ```json
//! { "PreToolUse": [ { "matcher": "Bash", "hooks": [ { "type": "command", "command": "lint" } ] } ] }
//! ```
//!
//! Groups are identified by `matcher`; actions inside a group by their
//! `(type, command)` pair.

use serde_json::{Map, Value};

/// Field identifying a hook group within one hook type.
pub const MATCHER_FIELD: &str = "matcher";

/// Field holding a group's actions.
pub const ACTIONS_FIELD: &str = "hooks";

/// Identity of an action within its group. Missing fields compare equal.
#[derive(Debug, PartialEq, Eq)]
struct ActionKey<'a> {
    kind: Option<&'a Value>,
    command: Option<&'a Value>,
}

impl<'a> ActionKey<'a> {
    fn of(action: &'a Value) -> Self {
        Self {
            kind: action.get("type"),
            command: action.get("command"),
        }
    }
}

/// Merge two hook registries.
///
/// Hook types only present in `source` are copied as-is; a `null` hook type
/// in `source` leaves the target entry alone. For shared hook
/// types each source group is matched against the accumulated list by
/// `matcher` (first match wins): matched groups gain the source actions
/// whose `(type, command)` is not already present, unmatched groups are
/// appended. Existing groups and actions never move.
pub fn merge_hooks(target: &Value, source: &Value) -> Value {
    let mut result = target.as_object().cloned().unwrap_or_default();
    let Some(source_map) = source.as_object() else {
        return Value::Object(result);
    };

    for (hook_type, source_groups) in source_map {
        if source_groups.is_null() {
            continue;
        }
        let merged = match (result.get(hook_type), source_groups) {
            (Some(Value::Array(existing)), Value::Array(incoming)) => {
                Value::Array(merge_groups(existing, incoming))
            }
            (_, other) => other.clone(),
        };
        result.insert(hook_type.clone(), merged);
    }
    Value::Object(result)
}

fn merge_groups(existing: &[Value], incoming: &[Value]) -> Vec<Value> {
    let mut groups = existing.to_vec();
    for group in incoming {
        let matcher = group.get(MATCHER_FIELD);
        match groups.iter().position(|g| g.get(MATCHER_FIELD) == matcher) {
            Some(index) => groups[index] = merge_group(&groups[index], group),
            None => groups.push(group.clone()),
        }
    }
    groups
}

/// Fold `incoming`'s actions into `existing`, keeping every other field of
/// `existing`. A later action with an already-present `(type, command)` is
/// dropped along with any extra fields it carries.
fn merge_group(existing: &Value, incoming: &Value) -> Value {
    let mut actions = actions_of(existing).to_vec();
    for action in actions_of(incoming) {
        let key = ActionKey::of(action);
        if !actions.iter().any(|a| ActionKey::of(a) == key) {
            actions.push(action.clone());
        }
    }

    let mut merged = existing.as_object().cloned().unwrap_or_else(Map::new);
    merged.insert(ACTIONS_FIELD.to_string(), Value::Array(actions));
    Value::Object(merged)
}

fn actions_of(group: &Value) -> &[Value] {
    group
        .get(ACTIONS_FIELD)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
