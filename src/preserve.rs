//! The set of top-level keys whose nested shape is kept.

use std::collections::HashSet;

/// Top-level field names that keep their nested structure when transformed.
///
/// Every other top-level field is flattened into a single string.
///
/// # Example
///
/// ```rust
/// use errjoin::PreserveKeys;
///
/// let keys: PreserveKeys = ["url", "urls", "url"].into_iter().collect();
/// assert_eq!(keys.len(), 2);
/// assert!(keys.contains("urls"));
/// assert!(!keys.contains("tags"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreserveKeys {
    keys: HashSet<String>,
}

impl PreserveKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key. Returns false if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PreserveKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for PreserveKeys {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}
