use std::collections::BTreeMap;
use std::collections::btree_map;

use svckit_core::{Result, ServiceError};

/// A flat string-to-string configuration table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key`, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// See [`filter_properties`].
    pub fn filter(&self, prefix: &str) -> Result<Properties> {
        filter_properties(self, prefix)
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Keep only the keys starting with `prefix` and strip that prefix from them.
///
/// Matching is a plain case-sensitive `starts_with`; `"myprefix.key1"` becomes
/// `"key1"` for the prefix `"myprefix."`. A key equal to the prefix maps to the
/// empty key. No match yields an empty table. A blank prefix is rejected
/// instead of returning the table unfiltered.
pub fn filter_properties(properties: &Properties, prefix: &str) -> Result<Properties> {
    if prefix.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(
            "can't filter properties using a blank prefix".into(),
        ));
    }

    Ok(properties
        .iter()
        .filter_map(|(key, value)| key.strip_prefix(prefix).map(|rest| (rest, value)))
        .collect())
}
