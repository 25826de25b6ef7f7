//! Attribute maps handed to the renderer.
//!
//! An [`AttrMap`] is a flat string → string mapping of Graphviz-style
//! attributes (`bgcolor`, `fontsize`, `pencolor`, ...). Key order carries no
//! meaning; the map is backed by a `BTreeMap` only so that exported documents
//! are stable.
//!
//! # Merging
//!
//! [`AttrMap::merge`] layers one map over another. Every key present in the
//! override replaces the base value, keys only present in the base are kept,
//! and neither input is modified:
//!
//! ```rust
//! use awsdiag_graph::AttrMap;
//!
//! let base = AttrMap::from_pairs([("style", "diagonals"), ("penwidth", "3")]);
//! let region = base.merge(&AttrMap::from_pairs([("style", "dotted")]));
//!
//! assert_eq!(region.get("style"), Some("dotted"));
//! assert_eq!(region.get("penwidth"), Some("3"));
//! assert_eq!(base.get("style"), Some("diagonals"));
//! ```

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// A mapping of attribute names to attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap {
    entries: BTreeMap<String, String>,
}

impl AttrMap {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(key, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Sets an attribute, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Sets an attribute by mutable reference.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a new map with `overrides` layered on top of `self`.
    ///
    /// Right-biased: on conflicting keys the override's value wins.
    pub fn merge(&self, overrides: &AttrMap) -> AttrMap {
        let mut merged = self.clone();
        merged.entries.extend(
            overrides
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        merged
    }

    /// Iterates attributes in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Iterates attribute names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_and_get() {
        let attrs = AttrMap::from_pairs([("fontsize", "24"), ("ranksep", "1.0")]);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("fontsize"), Some("24"));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn test_from_pairs_last_duplicate_wins() {
        let attrs = AttrMap::from_pairs([("style", "dotted"), ("style", "dashed")]);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("style"), Some("dashed"));
    }

    #[test]
    fn test_merge_override_wins() {
        let base = AttrMap::new().with("labeljust", "l").with("margin", "24");
        let merged = base.merge(&AttrMap::new().with("labeljust", "c"));
        assert_eq!(merged.get("labeljust"), Some("c"));
        assert_eq!(merged.get("margin"), Some("24"));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = AttrMap::new().with("style", "diagonals");
        let overrides = AttrMap::new().with("style", "dotted").with("pencolor", "#01A88D");
        let _ = base.merge(&overrides);
        assert_eq!(base.len(), 1);
        assert_eq!(base.get("style"), Some("diagonals"));
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn test_merge_is_not_commutative() {
        let a = AttrMap::new().with("style", "dotted");
        let b = AttrMap::new().with("style", "dashed");
        assert_ne!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn test_merge_with_empty() {
        let base = AttrMap::new().with("bgcolor", "#FFFFFF");
        assert_eq!(base.merge(&AttrMap::new()), base);
        assert_eq!(AttrMap::new().merge(&base), base);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let attrs = AttrMap::new().with("b", "2").with("a", "1");
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
