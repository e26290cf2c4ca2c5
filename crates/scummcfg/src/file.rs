//! Config file handling
//!
//! This module handles:
//! - Parsing the line-oriented domain file format
//! - Writing domains back with their comments
//! - Locating the platform default config file

mod location;
mod parser;
mod writer;

pub use location::{DEFAULT_CONFIG_FILE, default_config_path};
pub use parser::{Entry, Section, parse};
pub use writer::write_domain;
