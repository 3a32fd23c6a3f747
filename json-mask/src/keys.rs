//! The set of object field names whose scalar values get masked.

use std::collections::{hash_set, HashSet};

/// Immutable collection of field names to mask.
///
/// Matching is exact and case-sensitive. Duplicates supplied at construction
/// collapse into one entry. An empty set never matches, which turns masking
/// into a plain re-encode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "Vec<String>")
)]
pub struct KeySet {
    names: HashSet<String>,
}

impl KeySet {
    /// Builds a key set from any sequence of names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `name` is one of the masked field names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.names.iter()
    }
}

impl<S> FromIterator<S> for KeySet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for KeySet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
