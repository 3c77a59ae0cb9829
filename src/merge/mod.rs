//! Layered merge of JSON settings documents.
//!
//! A base document and any number of presets are folded left to right:
//! 1. **permissions** - `allow` / `deny` rule lists are set-unioned
//! 2. **hooks** - groups merge by `matcher`, actions dedupe by `(type, command)`
//! 3. **everything else** - objects recurse, lists concatenate without
//!    duplicates, scalars are overwritten by the later document
//!
//! Inputs are only borrowed; every step builds a new tree.

mod classify;
mod generic;
mod hooks;
mod permissions;

pub use classify::{Disposition, HOOKS_KEY, PERMISSIONS_KEY, classify};
pub use generic::{dedup_concat, deep_merge};
pub use hooks::{ACTIONS_FIELD, MATCHER_FIELD, merge_hooks};
pub use permissions::{PERMISSION_BUCKETS, merge_permissions};

use serde_json::Value;
use tracing::debug;

/// One parsed JSON settings document.
pub type ConfigDocument = Value;

/// Merge documents in order, later documents layered on top.
///
/// An empty sequence yields `{}`; a single document is returned as an owned
/// copy.
pub fn merge_all<'a>(documents: impl IntoIterator<Item = &'a ConfigDocument>) -> ConfigDocument {
    let mut documents = documents.into_iter();
    let Some(first) = documents.next() else {
        return generic::empty_object();
    };

    documents.enumerate().fold(first.clone(), |merged, (index, doc)| {
        debug!(layer = index + 1, "Merging document");
        deep_merge(&merged, doc)
    })
}
