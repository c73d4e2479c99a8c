//! Ordered string parameter maps.

use std::fmt;

use indexmap::IndexMap;

/// Insertion-ordered map of string parameters.
///
/// Backs every field of [`Request`](crate::request::Request): query
/// parameters, form parameters, routing attributes, cookies and server
/// metadata. Iteration yields pairs in insertion order; equality compares
/// contents only, ignoring order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: IndexMap<String, String>,
}

impl Params {
    /// Create an empty parameter map.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Create an empty parameter map with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    // Getters

    /// Get a value by parameter name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Check whether a parameter is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Get the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over name-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate over parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    // Modifiers

    /// Insert a parameter, returning the previous value if one was present.
    ///
    /// Re-inserting an existing name keeps its original position.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    /// Remove a parameter, preserving the order of the remaining ones.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.shift_remove(name)
    }

    /// Remove all parameters.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut params = Params::new();
        params.extend(pairs);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        self.inner.extend(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl From<IndexMap<String, String>> for Params {
    fn from(inner: IndexMap<String, String>) -> Self {
        Self { inner }
    }
}

impl From<Params> for IndexMap<String, String> {
    fn from(params: Params) -> Self {
        params.inner
    }
}
