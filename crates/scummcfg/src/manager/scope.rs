//! Domain resolution
//!
//! Every read and write first turns its `(key, domain)` arguments into a
//! [`Scope`], then touches exactly that domain.

use super::{APPLICATION_DOMAIN, ConfigManager, TRANSIENT_DOMAIN};
use crate::domain::Domain;

/// Where a value lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Session overrides
    Transient,
    /// A game domain
    Game(String),
    /// A global domain
    Global(String),
    /// Registered defaults
    Defaults,
}

impl ConfigManager {
    /// Find the domain a lookup of `key` would read from
    ///
    /// Follows the lookup order: transient (only when `domain` is empty or
    /// the transient name), then `domain` or the active game domain, then
    /// global domains in registration order, then defaults. Returns `None`
    /// when the key is set nowhere.
    #[must_use]
    pub fn locate(&self, key: &str, domain: &str) -> Option<Scope> {
        if (domain.is_empty() || domain == TRANSIENT_DOMAIN) && self.transient.contains(key) {
            return Some(Scope::Transient);
        }

        let name = if domain.is_empty() {
            self.active.as_str()
        } else {
            domain
        };
        if !name.is_empty() && self.games.get(name).is_some_and(|d| d.contains(key)) {
            return Some(Scope::Game(name.to_string()));
        }

        if let Some((global, _)) = self.globals.iter().find(|(_, d)| d.contains(key)) {
            return Some(Scope::Global(global.to_string()));
        }

        self.defaults.contains(key).then_some(Scope::Defaults)
    }

    /// Existing domain called exactly `domain`
    pub(super) fn named_scope(&self, domain: &str) -> Option<Scope> {
        if domain == TRANSIENT_DOMAIN {
            Some(Scope::Transient)
        } else if self.games.contains(domain) {
            Some(Scope::Game(domain.to_string()))
        } else if self.globals.contains(domain) {
            Some(Scope::Global(domain.to_string()))
        } else {
            None
        }
    }

    /// Domain a write addressed to `domain` lands in
    pub(super) fn write_scope(&self, domain: &str) -> Scope {
        if domain.is_empty() {
            if self.active.is_empty() {
                Scope::Global(APPLICATION_DOMAIN.to_string())
            } else {
                Scope::Game(self.active.clone())
            }
        } else if domain == TRANSIENT_DOMAIN {
            Scope::Transient
        } else if self.globals.contains(domain) {
            Scope::Global(domain.to_string())
        } else {
            Scope::Game(domain.to_string())
        }
    }

    pub(super) fn scope_domain(&self, scope: &Scope) -> Option<&Domain> {
        match scope {
            Scope::Transient => Some(&self.transient),
            Scope::Game(name) => self.games.get(name),
            Scope::Global(name) => self.globals.get(name),
            Scope::Defaults => Some(&self.defaults),
        }
    }

    /// Mutable domain for `scope`, creating game and global domains on demand
    pub(super) fn scope_domain_mut(&mut self, scope: &Scope) -> &mut Domain {
        match scope {
            Scope::Transient => &mut self.transient,
            Scope::Game(name) => self.games.entry(name),
            Scope::Global(name) => self.globals.entry(name),
            Scope::Defaults => &mut self.defaults,
        }
    }
}
