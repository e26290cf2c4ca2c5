//! Named collections of domains

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::Domain;

/// Mapping from domain name to [`Domain`], iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainMap {
    domains: Vec<(String, Domain)>,
}

impl DomainMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.domains.iter().position(|(n, _)| n == name)
    }

    /// Domain called `name`, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Domain> {
        self.position(name).map(|idx| &self.domains[idx].1)
    }

    /// Mutable domain called `name`, if present
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Domain> {
        self.position(name).map(move |idx| &mut self.domains[idx].1)
    }

    /// Domain called `name`, created empty when missing
    pub fn entry(&mut self, name: &str) -> &mut Domain {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.domains.push((name.to_string(), Domain::new()));
                self.domains.len() - 1
            }
        };
        &mut self.domains[idx].1
    }

    /// Whether a domain called `name` exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove and return the domain called `name`
    pub fn remove(&mut self, name: &str) -> Option<Domain> {
        let idx = self.position(name)?;
        Some(self.domains.remove(idx).1)
    }

    /// Number of domains
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the map holds no domains
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Drop every domain
    pub fn clear(&mut self) {
        self.domains.clear();
    }

    /// `(name, domain)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Domain)> {
        self.domains.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Domain names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for DomainMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.domains.len()))?;
        for (name, domain) in &self.domains {
            map.serialize_entry(name, domain)?;
        }
        map.end()
    }
}
