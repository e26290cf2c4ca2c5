//! Common types and utilities for command execution

use std::path::{Path, PathBuf};

use anyhow::Context;
use scummcfg_core::{ConfigManager, TRANSIENT_DOMAIN};
use scummcfg_core::file::default_config_path;
use tracing::debug;

/// Options shared by every command
pub struct SessionOptions<'a> {
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Game domain to activate
    pub game: Option<&'a str>,
    /// Session overrides for the transient domain
    pub overrides: &'a [(String, String)],
}

impl<'a> SessionOptions<'a> {
    /// Create new session options
    #[must_use]
    pub const fn new(
        config_path: Option<&'a Path>,
        game: Option<&'a str>,
        overrides: &'a [(String, String)],
    ) -> Self {
        Self {
            config_path,
            game,
            overrides,
        }
    }
}

/// A loaded configuration plus the file it came from
pub struct Session {
    /// The configuration
    pub manager: ConfigManager,
    /// Backing file
    pub path: PathBuf,
}

impl Session {
    /// Load the config file and apply the active game and overrides
    pub fn open(options: &SessionOptions<'_>) -> anyhow::Result<Self> {
        let path = options
            .config_path
            .map_or_else(default_config_path, Path::to_path_buf);
        debug!("Using config file {}", path.display());

        let mut manager = ConfigManager::with_file(&path)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(game) = options.game {
            manager.set_active_domain(game)?;
        }
        for (key, value) in options.overrides {
            manager.set_in(key, value, TRANSIENT_DOMAIN);
        }

        Ok(Self { manager, path })
    }

    /// Write the configuration back to its file
    pub fn save(&self) -> anyhow::Result<()> {
        self.manager
            .save_to(&self.path)
            .with_context(|| format!("Failed to save config file: {}", self.path.display()))
    }
}
