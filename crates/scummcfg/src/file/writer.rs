//! Config file writer

use std::io::{self, Write};

use crate::domain::Domain;

/// Write one domain block
///
/// Domains without keys produce no output. Keys whose value is empty are
/// left out.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_domain<W: Write>(out: &mut W, name: &str, domain: &Domain) -> io::Result<()> {
    if domain.is_empty() {
        return Ok(());
    }

    out.write_all(domain.domain_comment().as_bytes())?;
    writeln!(out, "[{name}]")?;

    for (key, value) in domain.iter() {
        if value.is_empty() {
            continue;
        }
        if let Some(comment) = domain.key_comment(key) {
            out.write_all(comment.as_bytes())?;
        }
        writeln!(out, "{key}={value}")?;
    }

    writeln!(out)
}
