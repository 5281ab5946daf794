//! Attribute storage and live-object bookkeeping.
//!
//! [`PropertyMap`] is the value container behind each catalog node: a
//! string-keyed attribute map with an optional caller-declared uniqueness-key
//! set. The catalog core uses it for attribute storage only; structural
//! invariants (parent/child symmetry, sibling uniqueness) are owned by
//! [`CatalogObject`](crate::CatalogObject) itself.
//!
//! The module also tracks the number of live catalog nodes. Because a node's
//! upward link is a weak reference, dropping the last external handle to a
//! tree releases the whole tree; [`live_object_count`] makes that observable
//! in tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;

/// String-keyed attribute map with a declared uniqueness-key set.
///
/// Insertion order is preserved for deterministic iteration. The uniqueness
/// keys are a declaration only: [`unique_key`](Self::unique_key) projects the
/// declared keys out of the stored values, but the map itself never rejects
/// writes based on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    unique_keys: Vec<String>,
    values: IndexMap<String, String>,
}

impl PropertyMap {
    /// Create an empty map with no declared uniqueness keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map declaring which keys identify the owning node.
    pub fn with_unique_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyMap {
            unique_keys: keys.into_iter().map(Into::into).collect(),
            values: IndexMap::new(),
        }
    }

    /// Set an attribute, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Remove an attribute, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.shift_remove(key)
    }

    /// Whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The declared uniqueness-key set.
    pub fn unique_keys(&self) -> &[String] {
        &self.unique_keys
    }

    /// Project the declared uniqueness keys out of the stored values.
    ///
    /// Declared keys with no stored value are omitted.
    pub fn unique_key(&self) -> Vec<(&str, &str)> {
        self.unique_keys
            .iter()
            .filter_map(|k| self.values.get(k).map(|v| (k.as_str(), v.as_str())))
            .collect()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Clone the attributes into a plain ordered map.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.values.clone()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

static LIVE_OBJECTS: AtomicUsize = AtomicUsize::new(0);

/// Number of catalog nodes currently alive in this process.
pub fn live_object_count() -> usize {
    LIVE_OBJECTS.load(Ordering::Relaxed)
}

pub(crate) fn record_construct() {
    LIVE_OBJECTS.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_drop() {
    LIVE_OBJECTS.fetch_sub(1, Ordering::Relaxed);
}
