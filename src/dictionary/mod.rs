//! Locale dictionaries: flat, ordered `key -> text` maps backed by one JSON file each.

pub mod collate;
mod merge;
mod store;
mod types;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

pub use merge::{
    merge_keys,
    propagate,
};
pub use store::{
    load,
    load_or_default,
    save,
    to_json,
};
pub use types::DictionaryError;

/// An ordered mapping from translation key to localized text.
///
/// Insertion order is preserved until [`Dictionary::sorted`] is applied, and is
/// the order in which entries are written back to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(IndexMap<String, String>);

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts `key` with itself as the value (identity placeholder) if absent.
    ///
    /// Returns true if the key was added. Existing values are never touched.
    pub fn insert_missing(&mut self, key: &str) -> bool {
        if self.0.contains_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), key.to_string());
        true
    }

    /// Reorders entries by [`collate::compare`], keeping every key/value pair.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.0.sort_by(|a, _, b, _| collate::compare(a, b));
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
