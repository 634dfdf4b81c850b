//! Persistent (immutable) dictionary based on a layered parent chain.
//!
//! This module provides [`Dict`], an immutable string-keyed mapping that
//! uses structural sharing for efficient updates.
//!
//! # Overview
//!
//! A `Dict` is a chain of *layers*. Each version owns one layer (the
//! key/value edits made at that version) plus the ordered list of keys that
//! are *visible* at that version, and holds a read-only link to the version
//! it was derived from. Lookup finds the most recent layer that defines a
//! key; updates push a small override layer instead of copying the whole
//! mapping.
//!
//! Visibility lives entirely in the key list: removing a key never erases
//! the stored value from any layer, it only drops the key from the new
//! version's visible set. Older and sibling versions are unaffected.
//!
//! # Key coercion
//!
//! Keys are always compared and stored by their string representation, so
//! `1` and `"1"` name the same entry.
//!
//! # Examples
//!
//! ```rust
//! use laminar::persistent::Dict;
//!
//! let dict = Dict::new().insert("a", 1).insert("b", 2);
//! let updated = dict.insert("a", 9);
//!
//! assert_eq!(updated.get("a"), Some(&9));
//! assert_eq!(updated.get("b"), Some(&2));
//! assert_eq!(dict.get("a"), Some(&1)); // Original unchanged
//! ```

use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;

use super::ReferenceCounter;

/// A persistent (immutable) string-keyed dictionary.
///
/// Every edit returns a new `Dict` value layered on the previous one; the
/// original is never modified. Unchanged entries resolve through the parent
/// chain instead of being copied.
///
/// # Time Complexity
///
/// | Operation      | Complexity                          |
/// |----------------|-------------------------------------|
/// | `insert`       | O(K) for the key-list update        |
/// | `get`          | O(K + D) — key scan plus chain walk |
/// | `contains_key` | O(K)                                |
/// | `remove`       | O(K)                                |
/// | `to_hash_map`  | O(K · D)                            |
///
/// where K is the number of visible keys and D the chain depth. Key lookup
/// is a deliberate linear scan: elements are compared by value, never by
/// structural hash.
///
/// # Examples
///
/// ```rust
/// use laminar::persistent::Dict;
///
/// let dict: Dict<i32> = [("one", 1), ("two", 2)].into_iter().collect();
/// assert_eq!(dict.get("one"), Some(&1));
/// assert_eq!(dict.len(), 2);
/// ```
pub struct Dict<V> {
    /// Key/value edits made at this version.
    layer: ReferenceCounter<HashMap<String, V>>,
    /// The version this one was derived from. `None` at the root.
    parent: Option<ReferenceCounter<Dict<V>>>,
    /// Keys visible at this version, in insertion order.
    keys: ReferenceCounter<Vec<String>>,
}

impl<V> Dict<V> {
    /// Creates a new empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict: Dict<i32> = Dict::new();
    /// assert!(dict.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            layer: ReferenceCounter::new(HashMap::new()),
            parent: None,
            keys: ReferenceCounter::new(Vec::new()),
        }
    }

    /// Returns the number of visible keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key is visible.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if `key` is visible in this version.
    ///
    /// Only the visible-key list is consulted; values buried in parent
    /// layers but removed from view do not count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1);
    /// assert!(dict.contains_key("a"));
    /// assert!(!dict.contains_key("b"));
    /// assert!(!dict.remove("a").contains_key("a"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: impl ToString) -> bool {
        let key = key.to_string();
        self.keys.iter().any(|candidate| *candidate == key)
    }

    /// Returns the value for `key`, if the key is visible.
    ///
    /// Resolution walks the layer chain from this version backward and
    /// stops at the first layer that defines the key, which is always the
    /// most recent write. Presence is tracked by layer membership, so
    /// legitimately stored "empty-looking" values are never masked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1).insert("b", 2).insert("a", 9);
    /// assert_eq!(dict.get("a"), Some(&9));
    /// assert_eq!(dict.get("b"), Some(&2));
    /// assert_eq!(dict.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: impl ToString) -> Option<&V> {
        let key = key.to_string();
        if !self.keys.iter().any(|candidate| *candidate == key) {
            return None;
        }

        let mut node = self;
        loop {
            if let Some(value) = node.layer.get(&key) {
                return Some(value);
            }
            node = node.parent.as_deref()?;
        }
    }

    /// Returns a new dictionary with `key` set to `value`.
    ///
    /// The new version carries a single-entry override layer parented on
    /// the receiver: values for all other keys keep resolving through the
    /// chain, and no existing layer is ever touched, so sibling derivations
    /// can never observe each other's inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1);
    /// let overridden = dict.insert("a", 2);
    ///
    /// assert_eq!(dict.get("a"), Some(&1));
    /// assert_eq!(overridden.get("a"), Some(&2));
    /// ```
    #[must_use]
    pub fn insert(&self, key: impl ToString, value: V) -> Self {
        let key = key.to_string();
        let already_visible = self.keys.iter().any(|candidate| *candidate == key);

        let mut layer = HashMap::with_capacity(1);
        layer.insert(key.clone(), value);

        let keys = if already_visible {
            ReferenceCounter::clone(&self.keys)
        } else {
            let mut keys = Vec::with_capacity(self.keys.len() + 1);
            keys.extend(self.keys.iter().cloned());
            keys.push(key);
            ReferenceCounter::new(keys)
        };

        Self {
            layer: ReferenceCounter::new(layer),
            parent: Some(ReferenceCounter::new(self.clone())),
            keys,
        }
    }

    /// Returns a new dictionary with `key` removed from view.
    ///
    /// The stored value is not erased from any layer; the key is only
    /// dropped from the new version's visible set, so older and derived
    /// versions keep seeing it. Removing an unknown key is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1);
    /// let removed = dict.remove("a");
    ///
    /// assert_eq!(removed.get("a"), None);
    /// assert_eq!(dict.get("a"), Some(&1)); // Original unchanged
    /// ```
    #[must_use]
    pub fn remove(&self, key: impl ToString) -> Self {
        let key = key.to_string();
        if !self.keys.iter().any(|candidate| *candidate == key) {
            return self.clone();
        }

        let keys: Vec<String> = self
            .keys
            .iter()
            .filter(|candidate| **candidate != key)
            .cloned()
            .collect();

        Self {
            layer: ReferenceCounter::clone(&self.layer),
            parent: self.parent.clone(),
            keys: ReferenceCounter::new(keys),
        }
    }

    /// Returns a new dictionary restricted to the given keys.
    ///
    /// Keys missing from the dictionary are ignored. The receiver's key
    /// order is preserved, not the argument's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1).insert("b", 2).insert("c", 3);
    /// let selected = dict.select_keys(&["c", "a", "missing"]);
    ///
    /// let keys: Vec<&str> = selected.keys().collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// ```
    #[must_use]
    pub fn select_keys<K: ToString>(&self, selection: &[K]) -> Self {
        let wanted: Vec<String> = selection.iter().map(|key| key.to_string()).collect();
        self.filter_keys(|key| wanted.iter().any(|candidate| candidate == key))
    }

    /// Returns a new dictionary without the given keys.
    ///
    /// The complement of [`select_keys`](Self::select_keys); unknown keys
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1).insert("b", 2).insert("c", 3);
    /// let remaining = dict.omit_keys(&["b"]);
    ///
    /// let keys: Vec<&str> = remaining.keys().collect();
    /// assert_eq!(keys, vec!["a", "c"]);
    /// ```
    #[must_use]
    pub fn omit_keys<K: ToString>(&self, omission: &[K]) -> Self {
        let unwanted: Vec<String> = omission.iter().map(|key| key.to_string()).collect();
        self.filter_keys(|key| !unwanted.iter().any(|candidate| candidate == key))
    }

    /// Shared implementation of the key-set restrictions: same layer, same
    /// parent, filtered visible keys.
    fn filter_keys(&self, mut keep: impl FnMut(&str) -> bool) -> Self {
        let keys: Vec<String> = self
            .keys
            .iter()
            .filter(|key| keep(key.as_str()))
            .cloned()
            .collect();

        Self {
            layer: ReferenceCounter::clone(&self.layer),
            parent: self.parent.clone(),
            keys: ReferenceCounter::new(keys),
        }
    }

    /// Returns an iterator over the visible keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> DictKeys<'_> {
        DictKeys {
            inner: self.keys.iter(),
        }
    }
}

impl<V: Clone> Dict<V> {
    /// Materializes the dictionary into a plain `HashMap`.
    ///
    /// Each visible key is resolved through the layer chain exactly as
    /// [`get`](Self::get) would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Dict;
    ///
    /// let dict = Dict::new().insert("a", 1).insert("a", 9).insert("b", 2);
    /// let map = dict.to_hash_map();
    ///
    /// assert_eq!(map.get("a"), Some(&9));
    /// assert_eq!(map.get("b"), Some(&2));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<String, V> {
        self.keys
            .iter()
            .filter_map(|key| {
                self.get(key.as_str())
                    .map(|value| (key.clone(), value.clone()))
            })
            .collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over a [`Dict`]'s visible keys in insertion order.
///
/// Created by [`Dict::keys`].
pub struct DictKeys<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for DictKeys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DictKeys<'_> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<V> Clone for Dict<V> {
    fn clone(&self) -> Self {
        Self {
            layer: ReferenceCounter::clone(&self.layer),
            parent: self.parent.clone(),
            keys: ReferenceCounter::clone(&self.keys),
        }
    }
}

impl<V> Default for Dict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<HashMap<String, V>> for Dict<V> {
    /// Builds a root dictionary from a seed mapping.
    ///
    /// `HashMap` iteration order is unspecified, so the visible key order of
    /// the result is too; use [`FromIterator`] when order matters.
    fn from(seed: HashMap<String, V>) -> Self {
        let keys: Vec<String> = seed.keys().cloned().collect();
        Self {
            layer: ReferenceCounter::new(seed),
            parent: None,
            keys: ReferenceCounter::new(keys),
        }
    }
}

impl<K: ToString, V> FromIterator<(K, V)> for Dict<V> {
    /// Builds a root dictionary from key/value pairs, preserving first-seen
    /// key order. A repeated key keeps its original position and takes the
    /// last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut layer = HashMap::new();
        let mut keys: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.to_string();
            if !keys.iter().any(|candidate| *candidate == key) {
                keys.push(key.clone());
            }
            layer.insert(key, value);
        }

        Self {
            layer: ReferenceCounter::new(layer),
            parent: None,
            keys: ReferenceCounter::new(keys),
        }
    }
}

impl<V: PartialEq> PartialEq for Dict<V> {
    /// Mapping equality: the same visible key set with equal values, key
    /// order not significant.
    fn eq(&self, other: &Self) -> bool {
        self.keys.len() == other.keys.len()
            && self
                .keys
                .iter()
                .all(|key| self.get(key.as_str()) == other.get(key.as_str()))
    }
}

impl<V: Eq> Eq for Dict<V> {}

impl<V: fmt::Debug> fmt::Debug for Dict<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Dict")?;
        formatter
            .debug_map()
            .entries(
                self.keys
                    .iter()
                    .filter_map(|key| self.get(key.as_str()).map(|value| (key, value))),
            )
            .finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for Dict<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(
            self.keys
                .iter()
                .filter_map(|key| self.get(key.as_str()).map(|value| (key, value))),
        )
    }
}

#[cfg(feature = "serde")]
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for Dict<V> {
    /// Deserializes from a map. The key order of the result follows the
    /// intermediate `HashMap` and is therefore unspecified.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashMap::<String, V>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let dict: Dict<i32> = Dict::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.get("anything"), None);
    }

    #[rstest]
    fn test_insert_and_get() {
        let dict = Dict::new().insert("a", 1).insert("b", 2);
        assert_eq!(dict.get("a"), Some(&1));
        assert_eq!(dict.get("b"), Some(&2));
        assert_eq!(dict.len(), 2);
    }

    #[rstest]
    fn test_override_resolves_through_chain() {
        let dict: Dict<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let updated = dict.insert("a", 9);

        assert_eq!(updated.get("a"), Some(&9));
        assert_eq!(updated.get("b"), Some(&2));
        assert_eq!(dict.get("a"), Some(&1));
    }

    #[rstest]
    fn test_snapshot_isolation_between_siblings() {
        let base = Dict::new().insert("shared", 0);
        let left = base.insert("left", 1);
        let right = base.insert("right", 2);

        assert_eq!(left.get("right"), None);
        assert_eq!(right.get("left"), None);
        assert_eq!(base.get("left"), None);
        assert_eq!(base.get("right"), None);
        assert_eq!(left.get("shared"), Some(&0));
        assert_eq!(right.get("shared"), Some(&0));
    }

    #[rstest]
    fn test_sibling_inserts_of_same_key_do_not_collide() {
        let base: Dict<i32> = Dict::new();
        let left = base.insert("k", 1);
        let right = base.insert("k", 2);

        assert_eq!(left.get("k"), Some(&1));
        assert_eq!(right.get("k"), Some(&2));
        assert_eq!(base.get("k"), None);
    }

    #[rstest]
    fn test_remove_is_non_destructive() {
        let dict = Dict::new().insert("a", 1);
        let removed = dict.remove("a");

        assert_eq!(removed.get("a"), None);
        assert!(!removed.contains_key("a"));
        assert_eq!(dict.get("a"), Some(&1));
    }

    #[rstest]
    fn test_remove_unknown_key_is_noop() {
        let dict = Dict::new().insert("a", 1);
        let same = dict.remove("missing");
        assert_eq!(same, dict);
    }

    #[rstest]
    fn test_reinsert_after_remove() {
        let dict = Dict::new().insert("a", 1);
        let cycled = dict.remove("a").insert("a", 2);

        assert_eq!(cycled.get("a"), Some(&2));
        let keys: Vec<&str> = cycled.keys().collect();
        assert_eq!(keys, vec!["a"]);
    }

    #[rstest]
    fn test_key_coercion_collides_numeric_and_string() {
        let dict = Dict::new().insert("1", 10);
        assert_eq!(dict.get(1), Some(&10));

        let removed = dict.insert("1", 11).remove(1);
        assert_eq!(removed.get(1), None);
        assert_eq!(removed.get("1"), None);
    }

    #[rstest]
    fn test_select_keys_preserves_receiver_order() {
        let dict: Dict<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let selected = dict.select_keys(&["c", "a", "zzz"]);

        let keys: Vec<&str> = selected.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(selected.get("c"), Some(&3));
        assert_eq!(selected.get("b"), None);
    }

    #[rstest]
    fn test_omit_keys_is_complement() {
        let dict: Dict<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let remaining = dict.omit_keys(&["b", "zzz"]);

        let keys: Vec<&str> = remaining.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(remaining.get("b"), None);
    }

    #[rstest]
    fn test_hidden_values_do_not_leak_through_restrictions() {
        let dict: Dict<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let narrowed = dict.select_keys(&["a"]);
        // The shared layer still physically holds "b"; visibility must not.
        let widened = narrowed.insert("c", 3);

        assert_eq!(widened.get("b"), None);
        assert!(!widened.contains_key("b"));
        assert_eq!(widened.get("c"), Some(&3));
    }

    #[rstest]
    fn test_to_hash_map_resolves_overrides() {
        let dict = Dict::new().insert("a", 1).insert("b", 2).insert("a", 9);
        let map = dict.to_hash_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&9));
        assert_eq!(map.get("b"), Some(&2));
    }

    #[rstest]
    fn test_from_iterator_preserves_first_seen_order() {
        let dict: Dict<i32> = [("b", 1), ("a", 2), ("b", 3)].into_iter().collect();
        let keys: Vec<&str> = dict.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(dict.get("b"), Some(&3));
    }

    #[rstest]
    fn test_equality_ignores_key_order() {
        let left: Dict<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let right: Dict<i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(left, right);

        let different = right.insert("a", 3);
        assert_ne!(left, different);
    }

    #[rstest]
    fn test_debug_output_lists_visible_entries() {
        let dict = Dict::new().insert("a", 1);
        assert_eq!(format!("{dict:?}"), "Dict{\"a\": 1}");
    }
}
