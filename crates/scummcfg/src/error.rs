//! Errors raised by the configuration manager.
//!
//! Every variant is a hard failure for the call that produced it. Degraded
//! conditions (an unreadable file at load time, an unwritable one at flush
//! time) are logged instead and never show up here, except through the
//! strict [`crate::ConfigManager::save_to`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`ConfigError`]
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A domain header ended before its closing `]`
    #[error("Config file buggy: missing ] in line {line}")]
    MissingBracket {
        /// 1-based line number
        line: usize,
    },

    /// A domain header contained a character outside `[A-Za-z0-9_-]`
    #[error("Config file buggy: invalid character '{ch}' in domain name in line {line}")]
    InvalidDomainChar {
        /// 1-based line number
        line: usize,
        /// Offending character
        ch: char,
    },

    /// A domain header had no name (`[]`)
    #[error("Config file buggy: empty domain name in line {line}")]
    EmptyDomainName {
        /// 1-based line number
        line: usize,
    },

    /// A domain header named a reserved domain
    #[error("Config file buggy: domain name '{name}' is reserved in line {line}")]
    ReservedDomainName {
        /// 1-based line number
        line: usize,
        /// The reserved name
        name: String,
    },

    /// A key/value pair appeared before any domain header
    #[error("Config file buggy: key/value pair found outside a domain in line {line}")]
    KeyOutsideDomain {
        /// 1-based line number
        line: usize,
    },

    /// A non-empty line that is neither comment, header nor key/value pair
    #[error("Config file buggy: junk found in line {line}: '{content}'")]
    Junk {
        /// 1-based line number
        line: usize,
        /// The trimmed line
        content: String,
    },

    /// A value requested as an integer did not start with a number
    #[error("Config value for '{key}' is not a valid integer: '{value}'")]
    InvalidInt {
        /// Key that was looked up
        key: String,
        /// Stored value
        value: String,
    },

    /// A value requested as a boolean was not one of the accepted literals
    #[error("Config value for '{key}' is not a valid bool: '{value}'")]
    InvalidBool {
        /// Key that was looked up
        key: String,
        /// Stored value
        value: String,
    },

    /// `remove_key` named a domain that exists nowhere
    #[error("Removing key '{key}' from non-existent domain '{domain}'")]
    NoSuchDomain {
        /// Key to remove
        key: String,
        /// Requested domain
        domain: String,
    },

    /// A required name argument was empty
    #[error("{what} must not be empty")]
    EmptyName {
        /// Which argument was empty
        what: &'static str,
    },

    /// A game domain name clashed with a global domain name, or vice versa
    #[error("Domain name '{name}' is already used by a {kind} domain")]
    DomainNameTaken {
        /// Requested name
        name: String,
        /// Kind of the existing domain, `game` or `global`
        kind: &'static str,
    },

    /// The config file could not be written
    #[error("Unable to write configuration file: {}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Line number for errors raised while parsing a config file
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MissingBracket { line }
            | Self::InvalidDomainChar { line, .. }
            | Self::EmptyDomainName { line }
            | Self::ReservedDomainName { line, .. }
            | Self::KeyOutsideDomain { line }
            | Self::Junk { line, .. } => Some(*line),
            _ => None,
        }
    }
}
