//! Prop composition.

use super::prop_set::{Handler, PropSet, PropValue};

/// Merge caller `overrides` into component-owned props.
///
/// See the module docs for the full rule table. Owned keys keep their
/// position; override-only keys are appended in the caller's order.
pub fn compose(owned: PropSet, overrides: PropSet) -> PropSet {
    let mut merged = owned;

    for (key, value) in overrides {
        let combined = match (merged.get(&key), value) {
            (Some(PropValue::Handler(own)), PropValue::Handler(theirs)) => {
                PropValue::Handler(theirs.then(own))
            }
            (Some(PropValue::Handler(_)), value) if value.is_absent() => continue,
            (_, value) => value,
        };
        merged.insert(key, combined);
    }

    merged
}

/// Chain the given handlers, skipping missing ones.
///
/// Returns `None` when every entry is `None`.
pub fn call_all<I>(handlers: I) -> Option<Handler>
where
    I: IntoIterator<Item = Option<Handler>>,
{
    handlers
        .into_iter()
        .flatten()
        .reduce(|acc, next| acc.then(&next))
}
