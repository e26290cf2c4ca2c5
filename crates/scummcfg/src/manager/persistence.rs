//! Loading and flushing the backing config file

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::ConfigManager;
use crate::domain::Domain;
use crate::error::{ConfigError, Result};
use crate::file::{self, Section};

impl ConfigManager {
    /// Merge the contents of `path` into the current state
    ///
    /// A file that cannot be opened is logged and leaves the state untouched.
    /// Content that is not UTF-8 is read as Latin-1, so every byte maps to a
    /// character and nothing is lost on the next flush.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error; nothing from the file is applied then.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = match fs::read(path) {
            Ok(bytes) => decode(bytes, path),
            Err(err) => {
                warn!("Unable to open configuration file {}: {err}", path.display());
                return Ok(());
            }
        };

        self.load_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(())
    }

    /// Merge config text into the current state
    ///
    /// # Errors
    ///
    /// Returns the first syntax error; nothing is applied then.
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let sections = file::parse(content)?;
        for section in sections {
            self.apply_section(section);
        }
        Ok(())
    }

    fn apply_section(&mut self, section: Section) {
        let Section {
            name,
            comment,
            entries,
        } = section;

        self.section_domain(&name).set_domain_comment(comment);
        self.save_order.push(name.clone());

        for entry in entries {
            self.set_in(&entry.key, &entry.value, &name);
            self.section_domain(&name)
                .set_key_comment(entry.key, entry.comment);
        }
    }

    /// Global domain called `name` if registered, else the game domain
    fn section_domain(&mut self, name: &str) -> &mut Domain {
        if self.globals.contains(name) {
            self.globals.entry(name)
        } else {
            self.games.entry(name)
        }
    }

    /// Write every non-empty global and game domain to `out`
    ///
    /// Domains read from the file come first in file order, then remaining
    /// global domains, then remaining game domains.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut globals_written: HashSet<&str> = HashSet::new();
        let mut games_written: HashSet<&str> = HashSet::new();

        for name in &self.save_order {
            if let Some(domain) = self.globals.get(name) {
                if globals_written.insert(name) {
                    file::write_domain(out, name, domain)?;
                }
            } else if let Some(domain) = self.games.get(name) {
                if games_written.insert(name) {
                    file::write_domain(out, name, domain)?;
                }
            }
        }

        for (name, domain) in self.globals.iter() {
            if globals_written.insert(name) {
                file::write_domain(out, name, domain)?;
            }
        }
        for (name, domain) in self.games.iter() {
            if games_written.insert(name) {
                file::write_domain(out, name, domain)?;
            }
        }

        Ok(())
    }

    /// The config file as [`ConfigManager::flush_to_disk`] would write it
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the configuration to `path`
    ///
    /// The file is truncated and rewritten in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out).map_err(io_err)?;
        out.flush().map_err(io_err)?;

        debug!("Flushed configuration to {}", path.display());
        Ok(())
    }

    /// Write the configuration to the backing file
    ///
    /// Failure is logged; the in-memory state is unaffected.
    pub fn flush_to_disk(&self) {
        if let Err(err) = self.save_to(&self.filename) {
            warn!("{err}: {}", source_message(&err));
        }
    }
}

fn decode(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "Configuration file {} is not valid UTF-8, reading it as Latin-1",
                path.display()
            );
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

fn source_message(err: &ConfigError) -> String {
    std::error::Error::source(err).map_or_else(String::new, ToString::to_string)
}
