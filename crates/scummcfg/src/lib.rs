//! # scummcfg-core
//!
//! Layered configuration-domain manager for multi-engine game interpreters.
//!
//! Values live in named domains: a transient domain for session overrides,
//! one or more global domains, one domain per configured game, and a
//! defaults domain for hard-coded fallbacks. Lookups walk those layers in
//! precedence order. Global and game domains are persisted to an INI-like
//! text file that keeps comments and the original domain order across a
//! load/flush cycle.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error type and result alias
pub mod error;

/// Ordered key/value storage with comment metadata
pub mod domain;

/// Named collections of domains
pub mod domain_map;

/// Config file reading, writing and default location
pub mod file;

/// The precedence-resolving configuration manager
pub mod manager;

pub use domain::Domain;
pub use domain_map::DomainMap;
pub use error::{ConfigError, Result};
pub use manager::{APPLICATION_DOMAIN, ConfigManager, Scope, TRANSIENT_DOMAIN};
