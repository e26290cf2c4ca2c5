//! Default config file location

use std::path::PathBuf;

/// File name of the config file, relative to the platform base directory
#[cfg(target_os = "macos")]
pub const DEFAULT_CONFIG_FILE: &str = "Library/Preferences/ScummVM Preferences";

/// File name of the config file, relative to the platform base directory
#[cfg(all(unix, not(target_os = "macos")))]
pub const DEFAULT_CONFIG_FILE: &str = ".scummvmrc";

/// File name of the config file, relative to the platform base directory
#[cfg(not(unix))]
pub const DEFAULT_CONFIG_FILE: &str = "scummvm.ini";

/// Resolve the platform default config file path
///
/// Unix-like systems keep the file under the home directory, everything else
/// under the user config directory. Without either, the bare file name is
/// returned and resolves against the working directory.
#[must_use]
pub fn default_config_path() -> PathBuf {
    base_dir().map_or_else(
        || PathBuf::from(DEFAULT_CONFIG_FILE),
        |dir| dir.join(DEFAULT_CONFIG_FILE),
    )
}

#[cfg(unix)]
fn base_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

#[cfg(not(unix))]
fn base_dir() -> Option<PathBuf> {
    dirs::config_dir()
}
