//! Set-union of keys into dictionaries.
//!
//! Both operations only ever add entries: existing values are kept and keys
//! that are no longer referenced anywhere are left in place.

use super::Dictionary;
use crate::extractor::KeySet;

/// Adds every extracted key missing from the default dictionary.
///
/// Returns the merged dictionary and the number of keys added. New keys map
/// to themselves until someone translates them.
#[must_use]
pub fn merge_keys(default: &Dictionary, keys: &KeySet) -> (Dictionary, usize) {
    let mut merged = default.clone();
    let added = keys.iter().filter(|key| merged.insert_missing(key)).count();
    (merged, added)
}

/// Adds every key of the default dictionary missing from `locale`.
///
/// Returns the updated locale and the number of keys added.
#[must_use]
pub fn propagate(default: &Dictionary, locale: &Dictionary) -> (Dictionary, usize) {
    let mut updated = locale.clone();
    let added = default.keys().filter(|key| updated.insert_missing(key)).count();
    (updated, added)
}
