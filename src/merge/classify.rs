//! Per-key strategy selection for the recursive merge.

use serde_json::Value;

/// Key holding the allow/deny rule lists.
pub const PERMISSIONS_KEY: &str = "permissions";

/// Key holding the event-hook registry.
pub const HOOKS_KEY: &str = "hooks";

/// How a single key of the source document is folded into the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Set-union of the `allow` / `deny` buckets.
    ReservedPermissions,
    /// Matcher-keyed merge of hook groups.
    ReservedHooks,
    /// Both sides are (or may be treated as) objects: recurse.
    RecurseObject,
    /// Concatenate and drop later duplicates.
    DedupConcat,
    /// Source value replaces the target value.
    Overwrite,
}

/// Pick the merge strategy for `key`.
///
/// Reserved keys are matched by name regardless of value shape. An object
/// source always recurses; when the target is missing or not an object the
/// recursion starts from an empty object, so a scalar or list target is
/// discarded.
pub fn classify(key: &str, _target: Option<&Value>, source: &Value) -> Disposition {
    match key {
        PERMISSIONS_KEY => Disposition::ReservedPermissions,
        HOOKS_KEY => Disposition::ReservedHooks,
        _ => match source {
            Value::Object(_) => Disposition::RecurseObject,
            Value::Array(_) => Disposition::DedupConcat,
            _ => Disposition::Overwrite,
        },
    }
}
