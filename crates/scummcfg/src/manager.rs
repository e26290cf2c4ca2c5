//! The configuration manager
//!
//! Owns every domain and answers lookups in this order:
//! 1. Transient domain (session overrides, never saved)
//! 2. Active game domain, or the explicitly requested one
//! 3. All global domains
//! 4. Registered defaults (never saved, ignored by [`ConfigManager::has_key`])
//!
//! One manager normally exists per process. It is passed to whoever needs
//! configuration instead of living in a global.

mod persistence;
mod scope;


use std::path::{Path, PathBuf};

use tracing::debug;

pub use scope::Scope;

use crate::domain::Domain;
use crate::domain_map::DomainMap;
use crate::error::{ConfigError, Result};
use crate::file::default_config_path;

/// Name of the application global domain
pub const APPLICATION_DOMAIN: &str = "scummvm";

/// Reserved name addressing the transient domain
pub const TRANSIENT_DOMAIN: &str = "__TRANSIENT";

const TRUE_STR: &str = "true";
const FALSE_STR: &str = "false";

/// Layered configuration store backed by a config file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    transient: Domain,
    globals: DomainMap,
    games: DomainMap,
    defaults: Domain,
    active: String,
    save_order: Vec<String>,
    extra_globals: Vec<String>,
    filename: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConfigManager {
    /// Create a manager with no backing file and only the application domain
    #[must_use]
    pub fn empty() -> Self {
        let mut globals = DomainMap::new();
        globals.entry(APPLICATION_DOMAIN);

        Self {
            transient: Domain::new(),
            globals,
            games: DomainMap::new(),
            defaults: Domain::new(),
            active: String::new(),
            save_order: Vec::new(),
            extra_globals: Vec::new(),
            filename: PathBuf::new(),
        }
    }

    /// Create a manager backed by `path` and load it
    ///
    /// A missing file is not an error; the manager starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn with_file(path: impl Into<PathBuf>) -> Result<Self> {
        let mut manager = Self::empty();
        manager.switch_file(path)?;
        Ok(manager)
    }

    /// Create a manager backed by the platform default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn open_default() -> Result<Self> {
        Self::with_file(default_config_path())
    }

    /// Register an additional global domain
    ///
    /// The domain survives [`ConfigManager::switch_file`] like the
    /// application domain does.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or already names a game domain.
    pub fn add_global_domain(&mut self, name: &str) -> Result<()> {
        require_name(name, "global domain name")?;
        if self.games.contains(name) {
            return Err(name_taken(name, "game"));
        }
        if !self.extra_globals.iter().any(|n| n == name) {
            self.extra_globals.push(name.to_string());
        }
        self.globals.entry(name);
        Ok(())
    }

    /// Drop all loaded state and load `path` instead
    ///
    /// Registered defaults are kept. The active domain is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn switch_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.globals.clear();
        self.games.clear();
        self.transient.clear();
        self.active.clear();
        self.save_order.clear();

        self.globals.entry(APPLICATION_DOMAIN);
        for name in &self.extra_globals {
            self.globals.entry(name);
        }

        self.filename = path.into();
        let filename = self.filename.clone();
        self.load_file(&filename)?;
        debug!("Switched to configuration {}", self.filename.display());
        Ok(())
    }

    /// Path of the backing config file
    #[must_use]
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    // Lookup

    /// Resolved value of `key`, or the empty string
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.get_in(key, "")
    }

    /// Resolved value of `key`, starting the search at `domain`
    ///
    /// An empty `domain` means the active domain.
    #[must_use]
    pub fn get_in(&self, key: &str, domain: &str) -> &str {
        self.locate(key, domain)
            .and_then(|scope| self.scope_domain(&scope))
            .map_or("", |d| d.get(key))
    }

    /// Resolved value of `key` as an integer; unset or empty reads as `0`
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not start with a number.
    pub fn get_int(&self, key: &str) -> Result<i32> {
        self.get_int_in(key, "")
    }

    /// [`ConfigManager::get_int`] starting the search at `domain`
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not start with a number.
    pub fn get_int_in(&self, key: &str, domain: &str) -> Result<i32> {
        let value = self.get_in(key, domain);
        if value.is_empty() {
            return Ok(0);
        }
        parse_int(value).ok_or_else(|| ConfigError::InvalidInt {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Resolved value of `key` as a boolean
    ///
    /// Accepts `true`, `yes`, `1`, `false`, `no` and `0`, case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns an error for any other value, including an empty one.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_bool_in(key, "")
    }

    /// [`ConfigManager::get_bool`] starting the search at `domain`
    ///
    /// # Errors
    ///
    /// Returns an error for any value outside the accepted literals.
    pub fn get_bool_in(&self, key: &str, domain: &str) -> Result<bool> {
        match self.get_in(key, domain) {
            TRUE_STR | "yes" | "1" => Ok(true),
            FALSE_STR | "no" | "0" => Ok(false),
            other => Err(ConfigError::InvalidBool {
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }

    /// Whether `key` is set in the transient, active game or a global domain
    ///
    /// Registered defaults do not count.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        matches!(self.locate(key, ""), Some(scope) if scope != Scope::Defaults)
    }

    /// Whether `key` is set in exactly the domain called `domain`
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` is empty.
    pub fn has_key_in(&self, key: &str, domain: &str) -> Result<bool> {
        require_name(domain, "domain")?;
        Ok(self
            .named_scope(domain)
            .and_then(|scope| self.scope_domain(&scope))
            .is_some_and(|d| d.contains(key)))
    }

    // Mutation

    /// Store `value` in the active game domain, or the application domain
    /// when no game is active
    ///
    /// Any transient override of `key` is dropped.
    pub fn set(&mut self, key: &str, value: &str) {
        self.set_in(key, value, "");
    }

    /// Store `value` in `domain`
    ///
    /// An empty `domain` behaves like [`ConfigManager::set`], the transient
    /// name writes a session override, a global domain name writes that
    /// global domain, and any other name writes (and creates) a game domain.
    pub fn set_in(&mut self, key: &str, value: &str, domain: &str) {
        let scope = self.write_scope(domain);
        let clear_override = match &scope {
            Scope::Transient | Scope::Defaults => false,
            _ if domain.is_empty() => true,
            Scope::Global(_) => !self.active_game().is_some_and(|d| d.contains(key)),
            Scope::Game(name) => *name == self.active,
        };

        self.scope_domain_mut(&scope).set(key, value);
        if clear_override {
            self.transient.remove(key);
        }
    }

    /// Store an integer
    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set_int_in(key, value, "");
    }

    /// Store an integer in `domain`
    pub fn set_int_in(&mut self, key: &str, value: i32, domain: &str) {
        self.set_in(key, &value.to_string(), domain);
    }

    /// Store a boolean as `true` or `false`
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set_bool_in(key, value, "");
    }

    /// Store a boolean in `domain`
    pub fn set_bool_in(&mut self, key: &str, value: bool, domain: &str) {
        self.set_in(key, bool_str(value), domain);
    }

    /// Remove `key` from exactly the domain called `domain`
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` is empty or names no existing domain.
    pub fn remove_key(&mut self, key: &str, domain: &str) -> Result<()> {
        require_name(domain, "domain")?;
        let scope = self
            .named_scope(domain)
            .ok_or_else(|| ConfigError::NoSuchDomain {
                key: key.to_string(),
                domain: domain.to_string(),
            })?;
        self.scope_domain_mut(&scope).remove(key);
        Ok(())
    }

    // Defaults

    /// Register a fallback value, consulted only after every other domain
    pub fn register_default(&mut self, key: &str, value: &str) {
        self.defaults.set(key, value);
    }

    /// Register an integer fallback
    pub fn register_default_int(&mut self, key: &str, value: i32) {
        self.register_default(key, &value.to_string());
    }

    /// Register a boolean fallback
    pub fn register_default_bool(&mut self, key: &str, value: bool) {
        self.register_default(key, bool_str(value));
    }

    // Domains

    /// Select the active game domain, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or names a global domain.
    pub fn set_active_domain(&mut self, name: &str) -> Result<()> {
        require_name(name, "active domain name")?;
        self.require_game_name(name)?;
        self.games.entry(name);
        name.clone_into(&mut self.active);
        debug!("Active domain set to {name}");
        Ok(())
    }

    /// Name of the active game domain, empty when none is selected
    #[must_use]
    pub fn active_domain(&self) -> &str {
        &self.active
    }

    /// Delete a game domain
    ///
    /// Deleting the active domain also deselects it.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn remove_game_domain(&mut self, name: &str) -> Result<()> {
        require_name(name, "game domain name")?;
        if self.games.remove(name).is_some() {
            debug!("Removed game domain {name}");
        }
        if self.active == name {
            self.active.clear();
        }
        Ok(())
    }

    /// Move every key of game domain `old` into `new`, then delete `old`
    ///
    /// `new` is created when missing. Keys present in both end up with the
    /// value from `old`. If `old` was active, `new` becomes active.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or `new` names a global
    /// domain.
    pub fn rename_game_domain(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            return Ok(());
        }
        require_name(old, "old game domain name")?;
        require_name(new, "new game domain name")?;
        self.require_game_name(new)?;

        let source = self.games.remove(old);
        let target = self.games.entry(new);
        if let Some(source) = source {
            target.merge(&source);
        }

        if self.active == old {
            new.clone_into(&mut self.active);
        }
        debug!("Renamed game domain {old} to {new}");
        Ok(())
    }

    /// Whether a game domain called `name` exists
    ///
    /// Unlike the mutating domain operations this is a plain query, so an
    /// empty `name` is answered with `false` instead of an error.
    #[must_use]
    pub fn has_game_domain(&self, name: &str) -> bool {
        !name.is_empty() && self.games.contains(name)
    }

    /// Game or global domain called `name`, game domains first
    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.games.get(name).or_else(|| self.globals.get(name))
    }

    /// All game domains
    #[must_use]
    pub const fn game_domains(&self) -> &DomainMap {
        &self.games
    }

    /// All global domains
    #[must_use]
    pub const fn global_domains(&self) -> &DomainMap {
        &self.globals
    }

    /// Session overrides
    #[must_use]
    pub const fn transient_domain(&self) -> &Domain {
        &self.transient
    }

    /// Registered defaults
    #[must_use]
    pub const fn defaults_domain(&self) -> &Domain {
        &self.defaults
    }

    /// Domain names in the order they were first read from the file
    #[must_use]
    pub fn save_order(&self) -> &[String] {
        &self.save_order
    }

    fn require_game_name(&self, name: &str) -> Result<()> {
        if self.globals.contains(name) {
            Err(name_taken(name, "global"))
        } else {
            Ok(())
        }
    }

    fn active_game(&self) -> Option<&Domain> {
        if self.active.is_empty() {
            None
        } else {
            self.games.get(&self.active)
        }
    }
}

fn require_name(name: &str, what: &'static str) -> Result<()> {
    if name.is_empty() {
        Err(ConfigError::EmptyName { what })
    } else {
        Ok(())
    }
}

fn name_taken(name: &str, kind: &'static str) -> ConfigError {
    ConfigError::DomainNameTaken {
        name: name.to_string(),
        kind,
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value { TRUE_STR } else { FALSE_STR }
}

/// Parse a leading base-10 integer the way C `strtol` does
///
/// Leading whitespace and a sign are accepted, trailing junk after at least
/// one digit is ignored. Values outside `i32` are rejected.
fn parse_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("192"), Some(192));
        assert_eq!(parse_int("  -5"), Some(-5));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999"), None);
        assert_eq!(parse_int("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_empty_manager_has_application_domain() {
        let manager = ConfigManager::empty();
        assert!(manager.global_domains().contains(APPLICATION_DOMAIN));
        assert!(manager.game_domains().is_empty());
        assert_eq!(manager.active_domain(), "");
    }

    #[test]
    fn test_set_without_active_domain_writes_application_domain() {
        let mut manager = ConfigManager::empty();
        manager.set("mastervolume", "192");

        let app = manager.global_domains().get(APPLICATION_DOMAIN).unwrap();
        assert_eq!(app.get("mastervolume"), "192");
    }

    #[test]
    fn test_set_with_active_domain_writes_game_domain() {
        let mut manager = ConfigManager::empty();
        manager.set_active_domain("monkey1").unwrap();
        manager.set("language", "en");

        assert_eq!(manager.get("language"), "en");
        assert_eq!(manager.get_in("language", APPLICATION_DOMAIN), "");
        assert_eq!(
            manager.game_domains().get("monkey1").unwrap().get("language"),
            "en"
        );
    }

    #[test]
    fn test_get_int_tolerates_missing() {
        let manager = ConfigManager::empty();
        assert_eq!(manager.get_int("subtitles").unwrap(), 0);
    }

    #[test]
    fn test_get_int_rejects_non_numeric() {
        let mut manager = ConfigManager::empty();
        manager.set("volume", "abc");
        assert!(matches!(
            manager.get_int("volume"),
            Err(ConfigError::InvalidInt { .. })
        ));
    }

    #[test]
    fn test_stored_value_beats_default() {
        let mut manager = ConfigManager::empty();
        manager.register_default_int("mastervolume", 255);
        assert_eq!(manager.get_int("mastervolume").unwrap(), 255);

        manager.set_int("mastervolume", 192);
        assert_eq!(manager.get_int("mastervolume").unwrap(), 192);
    }

    #[test]
    fn test_get_bool_literals() {
        let mut manager = ConfigManager::empty();
        for (raw, expected) in [
            ("true", true),
            ("yes", true),
            ("1", true),
            ("false", false),
            ("no", false),
            ("0", false),
        ] {
            manager.set("flag", raw);
            assert_eq!(manager.get_bool("flag").unwrap(), expected, "{raw}");
        }

        for raw in ["TRUE", "2", "", "on"] {
            manager.set("flag", raw);
            assert!(
                matches!(manager.get_bool("flag"), Err(ConfigError::InvalidBool { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_set_bool_writes_literals() {
        let mut manager = ConfigManager::empty();
        manager.set_bool("subtitles", true);
        manager.register_default_bool("fullscreen", false);

        assert_eq!(manager.get("subtitles"), "true");
        assert_eq!(manager.get("fullscreen"), "false");
        assert!(manager.get_bool("subtitles").unwrap());
    }

    #[test]
    fn test_has_key_ignores_defaults() {
        let mut manager = ConfigManager::empty();
        manager.register_default("gfx_mode", "2x");

        assert!(!manager.has_key("gfx_mode"));
        assert_eq!(manager.get("gfx_mode"), "2x");
    }

    #[test]
    fn test_has_key_in() {
        let mut manager = ConfigManager::empty();
        manager.set_in("language", "de", "monkey1");
        manager.set_in("speed", "fast", TRANSIENT_DOMAIN);

        assert!(manager.has_key_in("language", "monkey1").unwrap());
        assert!(!manager.has_key_in("language", APPLICATION_DOMAIN).unwrap());
        assert!(manager.has_key_in("speed", TRANSIENT_DOMAIN).unwrap());
        assert!(!manager.has_key_in("speed", "nowhere").unwrap());
        assert!(matches!(
            manager.has_key_in("speed", ""),
            Err(ConfigError::EmptyName { .. })
        ));
    }

    #[test]
    fn test_transient_override_and_clear() {
        let mut manager = ConfigManager::empty();
        manager.set("music_volume", "100");
        manager.set_in("music_volume", "50", TRANSIENT_DOMAIN);
        assert_eq!(manager.get("music_volume"), "50");

        // A plain set always drops the override.
        manager.set("music_volume", "120");
        assert_eq!(manager.get("music_volume"), "120");
        assert!(!manager.transient_domain().contains("music_volume"));
    }

    #[test]
    fn test_global_write_keeps_override_shadowed_by_active_game() {
        let mut manager = ConfigManager::empty();
        manager.set_active_domain("monkey1").unwrap();
        manager.set_in("language", "fr", "monkey1");
        manager.set_in("language", "es", TRANSIENT_DOMAIN);

        manager.set_in("language", "en", APPLICATION_DOMAIN);
        assert!(manager.transient_domain().contains("language"));

        manager.set_in("talkspeed", "3", TRANSIENT_DOMAIN);
        manager.set_in("talkspeed", "5", APPLICATION_DOMAIN);
        assert!(!manager.transient_domain().contains("talkspeed"));
    }

    #[test]
    fn test_game_write_clears_override_only_for_active() {
        let mut manager = ConfigManager::empty();
        manager.set_active_domain("monkey1").unwrap();
        manager.set_in("language", "es", TRANSIENT_DOMAIN);

        manager.set_in("language", "de", "monkey2");
        assert_eq!(manager.get("language"), "es");

        manager.set_in("language", "fr", "monkey1");
        assert_eq!(manager.get("language"), "fr");
    }

    #[test]
    fn test_set_in_unknown_domain_creates_game_domain() {
        let mut manager = ConfigManager::empty();
        manager.set_in("path", "/games/zak", "zak");
        assert!(manager.has_game_domain("zak"));
        assert_eq!(manager.get_in("path", "zak"), "/games/zak");
    }

    #[test]
    fn test_remove_key() {
        let mut manager = ConfigManager::empty();
        manager.set_in("language", "de", "monkey1");
        manager.remove_key("language", "monkey1").unwrap();
        assert!(!manager.has_key_in("language", "monkey1").unwrap());

        manager.set_in("speed", "1", TRANSIENT_DOMAIN);
        manager.remove_key("speed", TRANSIENT_DOMAIN).unwrap();
        assert!(!manager.transient_domain().contains("speed"));
    }

    #[test]
    fn test_remove_key_errors() {
        let mut manager = ConfigManager::empty();
        assert!(matches!(
            manager.remove_key("language", ""),
            Err(ConfigError::EmptyName { .. })
        ));
        assert!(matches!(
            manager.remove_key("language", "nowhere"),
            Err(ConfigError::NoSuchDomain { .. })
        ));
    }

    #[test]
    fn test_set_active_domain_requires_name() {
        let mut manager = ConfigManager::empty();
        assert!(manager.set_active_domain("").is_err());
        assert_eq!(manager.active_domain(), "");
    }

    #[test]
    fn test_game_and_global_names_do_not_collide() {
        let mut manager = ConfigManager::empty();
        assert!(matches!(
            manager.set_active_domain(APPLICATION_DOMAIN),
            Err(ConfigError::DomainNameTaken { kind: "global", .. })
        ));
        assert_eq!(manager.active_domain(), "");
        assert!(!manager.has_game_domain(APPLICATION_DOMAIN));

        manager.set_in("path", "/games/monkey1", "monkey1");
        assert!(matches!(
            manager.rename_game_domain("monkey1", APPLICATION_DOMAIN),
            Err(ConfigError::DomainNameTaken { kind: "global", .. })
        ));
        assert_eq!(manager.get_in("path", "monkey1"), "/games/monkey1");

        assert!(matches!(
            manager.add_global_domain("monkey1"),
            Err(ConfigError::DomainNameTaken { kind: "game", .. })
        ));
        assert!(!manager.global_domains().contains("monkey1"));
    }

    #[test]
    fn test_has_game_domain_empty_name() {
        let mut manager = ConfigManager::empty();
        manager.set_in("k", "v", "monkey1");
        assert!(!manager.has_game_domain(""));
        assert!(manager.has_game_domain("monkey1"));
    }

    #[test]
    fn test_remove_active_game_domain_clears_selection() {
        let mut manager = ConfigManager::empty();
        manager.set_active_domain("monkey1").unwrap();
        manager.remove_game_domain("monkey1").unwrap();

        assert!(!manager.has_game_domain("monkey1"));
        assert_eq!(manager.active_domain(), "");

        // Writes fall back to the application domain again.
        manager.set("language", "en");
        assert_eq!(manager.get_in("language", APPLICATION_DOMAIN), "en");
    }

    #[test]
    fn test_rename_source_overwrites_target() {
        let mut manager = ConfigManager::empty();
        manager.set_in("x", "from_a", "a");
        manager.set_in("only_a", "1", "a");
        manager.set_in("x", "from_b", "b");
        manager.set_in("only_b", "2", "b");

        manager.rename_game_domain("a", "b").unwrap();

        assert!(!manager.has_game_domain("a"));
        assert_eq!(manager.get_in("x", "b"), "from_a");
        assert_eq!(manager.get_in("only_a", "b"), "1");
        assert_eq!(manager.get_in("only_b", "b"), "2");
    }

    #[test]
    fn test_rename_moves_active_selection() {
        let mut manager = ConfigManager::empty();
        manager.set_active_domain("old").unwrap();
        manager.set("k", "v");

        manager.rename_game_domain("old", "new").unwrap();
        assert_eq!(manager.active_domain(), "new");
        assert_eq!(manager.get("k"), "v");
    }

    #[test]
    fn test_rename_same_name_is_noop() {
        let mut manager = ConfigManager::empty();
        manager.set_in("k", "v", "a");
        manager.rename_game_domain("a", "a").unwrap();
        assert_eq!(manager.get_in("k", "a"), "v");
        assert!(manager.rename_game_domain("", "b").is_err());
    }

    #[test]
    fn test_extra_global_domain() {
        let mut manager = ConfigManager::empty();
        manager.add_global_domain("wince").unwrap();
        manager.set_in("keys", "mapped", "wince");

        assert!(!manager.has_game_domain("wince"));
        assert!(manager.has_key("keys"));
        assert_eq!(manager.get("keys"), "mapped");
    }
}
