//! A single configuration domain
//!
//! Keys keep their insertion order so that a domain is written back in the
//! order it was read. Comments are kept beside the values, never inside them.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered key/value storage with attached comment blobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    entries: Vec<(String, String)>,
    comment: String,
    key_comments: HashMap<String, String>,
}

impl Domain {
    /// Create an empty domain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Value for `key`, or the empty string when it is not stored
    ///
    /// Use [`Domain::contains`] to tell an unset key from a stored empty value.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.find(key).unwrap_or("")
    }

    /// Value for `key` if it is stored
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.entries[idx].1.as_str())
    }

    /// Insert or overwrite a value
    ///
    /// An overwritten key keeps its original position and its comment.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove a key, returning its previous value
    ///
    /// The key's comment is dropped along with it.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.key_comments.remove(key);
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Whether `key` is stored (even with an empty value)
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Copy every key of `other` into this domain
    ///
    /// Keys present in both take the value from `other`. Comments are not
    /// carried over.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.set(key.as_str(), value.as_str());
        }
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all keys and comments
    pub fn clear(&mut self) {
        self.entries.clear();
        self.comment.clear();
        self.key_comments.clear();
    }

    /// Key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Raw comment lines that precede the domain header
    #[must_use]
    pub fn domain_comment(&self) -> &str {
        &self.comment
    }

    /// Replace the domain comment
    pub fn set_domain_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Raw comment lines that precede `key`
    #[must_use]
    pub fn key_comment(&self, key: &str) -> Option<&str> {
        self.key_comments.get(key).map(String::as_str)
    }

    /// Whether a comment is recorded for `key`
    #[must_use]
    pub fn has_key_comment(&self, key: &str) -> bool {
        self.key_comments.contains_key(key)
    }

    /// Attach a comment to `key`; an empty comment removes it
    pub fn set_key_comment(&mut self, key: impl Into<String>, comment: impl Into<String>) {
        let key = key.into();
        let comment = comment.into();
        if comment.is_empty() {
            self.key_comments.remove(&key);
        } else {
            self.key_comments.insert(key, comment);
        }
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Domain {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut domain = Self::new();
        for (key, value) in iter {
            domain.set(key, value);
        }
        domain
    }
}
