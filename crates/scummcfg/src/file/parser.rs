//! Config file parser
//!
//! The format is line oriented:
//! - `#` in the first column starts a comment line. Comment lines pile up
//!   until the next header or key/value pair, which takes ownership of them.
//! - `[name]` opens a domain. Names use `[A-Za-z0-9_-]`.
//! - `key = value` sets a key in the current domain, split at the first `=`.
//! - Blank lines are ignored and do not reset pending comments.

use crate::error::{ConfigError, Result};
use crate::manager::TRANSIENT_DOMAIN;

/// A key/value line with the comment lines that preceded it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Key, trimmed
    pub key: String,
    /// Value, trimmed
    pub value: String,
    /// Raw comment lines, each terminated by `\n`
    pub comment: String,
}

/// A domain header and the entries that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Domain name
    pub name: String,
    /// Raw comment lines before the header, each terminated by `\n`
    pub comment: String,
    /// Entries in file order
    pub entries: Vec<Entry>,
}

/// Parse config file contents into sections in file order
///
/// A domain name may appear in several sections; callers decide how to
/// combine them.
///
/// # Errors
///
/// Returns the first syntax error, tagged with its 1-based line number.
pub fn parse(content: &str) -> Result<Vec<Section>> {
    let mut sections: Vec<Section> = Vec::new();
    let mut comment = String::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;

        if raw.starts_with('#') {
            comment.push_str(raw);
            comment.push('\n');
        } else if let Some(rest) = raw.strip_prefix('[') {
            let name = parse_header(rest, line)?;
            sections.push(Section {
                name,
                comment: std::mem::take(&mut comment),
                entries: Vec::new(),
            });
        } else {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some(section) = sections.last_mut() else {
                return Err(ConfigError::KeyOutsideDomain { line });
            };

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ConfigError::Junk {
                    line,
                    content: trimmed.to_string(),
                });
            };

            section.entries.push(Entry {
                key: key.trim_end().to_string(),
                value: value.trim_start().to_string(),
                comment: std::mem::take(&mut comment),
            });
        }
    }

    Ok(sections)
}

/// Extract the domain name from the text following `[`
fn parse_header(rest: &str, line: usize) -> Result<String> {
    let end = rest
        .find(|c: char| !is_domain_char(c))
        .ok_or(ConfigError::MissingBracket { line })?;

    match rest[end..].chars().next() {
        Some(']') => {}
        Some(ch) => return Err(ConfigError::InvalidDomainChar { line, ch }),
        None => return Err(ConfigError::MissingBracket { line }),
    }

    let name = &rest[..end];
    if name.is_empty() {
        return Err(ConfigError::EmptyDomainName { line });
    }
    if name == TRANSIENT_DOMAIN {
        return Err(ConfigError::ReservedDomainName {
            line,
            name: name.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Characters allowed in a domain name
fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
