use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::ConfigError;
use crate::parser::{Line, LineError, parse_line};
use crate::settings::{DEFAULT_CONFIG_FILENAME, SteamSettings};
use crate::value::{FromConfigValue, split_list};

/// A line that was skipped during the last load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub error: LineError,
}

type Section = BTreeMap<String, String>;

/// In-memory view of an INI configuration file.
///
/// Section and key names are stored lowercased; every lookup lowercases its
/// arguments before probing (except [`ConfigStore::section_keys`]). Nothing
/// here fails loudly: missing files, bad lines and unparsable values all
/// degrade to defaults and a warning.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    source_path: PathBuf,
    loaded: bool,
    table: BTreeMap<String, Section>,
    settings: SteamSettings,
    diagnostics: Vec<LineDiagnostic>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Creates an empty store carrying the built-in Steam defaults.
    pub fn new() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_CONFIG_FILENAME),
            loaded: false,
            table: BTreeMap::new(),
            settings: SteamSettings::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Creates a store and immediately tries to load `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self::new();
        store.load(path);
        store
    }

    /// Creates a store from `vaporcore.ini` in the working directory.
    pub fn open_default() -> Self {
        Self::open(DEFAULT_CONFIG_FILENAME)
    }

    /// Replaces all state with the contents of `path`.
    ///
    /// Returns `false` when the file cannot be read; the store is then empty
    /// and reports built-in defaults. Malformed lines do not fail the load.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.reset(path);

        info!(path = %path.display(), "loading configuration");

        let bytes = match read_source(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "could not open config file (using defaults)");
                return false;
            }
        };

        self.ingest(&String::from_utf8_lossy(&bytes));
        self.finish();
        true
    }

    /// Same as [`ConfigStore::load`] for text already in memory.
    ///
    /// `source_name` is only recorded as the source path for reporting.
    pub fn load_str(&mut self, source_name: impl AsRef<Path>, text: &str) -> bool {
        let source_name = source_name.as_ref();
        self.reset(source_name);
        debug!(source = %source_name.display(), "loading configuration from memory");
        self.ingest(text);
        self.finish();
        true
    }

    fn reset(&mut self, path: &Path) {
        self.source_path = path.to_path_buf();
        self.loaded = false;
        self.table.clear();
        self.settings = SteamSettings::default();
        self.diagnostics.clear();
    }

    fn ingest(&mut self, text: &str) {
        let mut section: Option<String> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            match parse_line(raw) {
                Ok(Line::Skip) => {}
                Ok(Line::Section(name)) => {
                    debug!(section = %name, "found section");
                    // `[]` names nothing; keys after it have no section.
                    section = (!name.is_empty()).then_some(name);
                }
                Ok(Line::Entry { key, value }) => match &section {
                    Some(name) => {
                        debug!(section = %name, key = %key, value = %value, "config entry");
                        self.table
                            .entry(name.clone())
                            .or_default()
                            .insert(key, value);
                    }
                    None => self.reject(line, LineError::NoSection { key }),
                },
                Err(e) => self.reject(line, e),
            }
        }
    }

    fn reject(&mut self, line: usize, error: LineError) {
        warn!(
            path = %self.source_path.display(),
            line,
            "error parsing config line: {error}"
        );
        self.diagnostics.push(LineDiagnostic { line, error });
    }

    fn finish(&mut self) {
        self.loaded = true;
        self.settings = SteamSettings::from_store(self);

        info!(
            path = %self.source_path.display(),
            app_id = self.settings.app_id,
            steam_id = %self.settings.steam_id,
            username = %self.settings.username,
            language = %self.settings.language,
            skipped_lines = self.diagnostics.len(),
            "configuration loaded"
        );
    }

    /// True after a file was read in full, even if some lines were skipped.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The file most recently loaded or attempted.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Derived Steam settings of the last load.
    pub fn settings(&self) -> &SteamSettings {
        &self.settings
    }

    /// Lines skipped by the last load.
    pub fn diagnostics(&self) -> &[LineDiagnostic] {
        &self.diagnostics
    }

    fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        self.table
            .get(&section.to_ascii_lowercase())?
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.lookup(section, key).unwrap_or(default).to_string()
    }

    /// Reads and converts a value without falling back to a default.
    ///
    /// `Ok(None)` for absent or empty values, an error when the value does
    /// not convert to `T`.
    pub fn try_get<T: FromConfigValue>(
        &self,
        section: &str,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        let Some(raw) = self.lookup(section, key).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        T::parse(raw).map(Some).ok_or_else(|| ConfigError::InvalidValue {
            kind: T::KIND,
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
        })
    }

    fn get_or<T: FromConfigValue>(&self, section: &str, key: &str, default: T) -> T {
        match self.try_get(section, key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                warn!("{e}");
                default
            }
        }
    }

    /// `true` for `true`/`1`/`yes`/`on` (any case), `false` for any other
    /// value, `default` only when the key is absent or empty.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_or(section, key, default)
    }

    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get_or(section, key, default)
    }

    pub fn get_u32(&self, section: &str, key: &str, default: u32) -> u32 {
        self.get_or(section, key, default)
    }

    pub fn get_u64(&self, section: &str, key: &str, default: u64) -> u64 {
        self.get_or(section, key, default)
    }

    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.get_or(section, key, default)
    }

    /// Comma-separated values, trimmed, empty pieces dropped, order kept.
    pub fn get_string_list(&self, section: &str, key: &str) -> Vec<String> {
        self.lookup(section, key).map(split_list).unwrap_or_default()
    }

    /// Like [`ConfigStore::get_string_list`], dropping pieces that are not
    /// integers.
    pub fn get_int_list(&self, section: &str, key: &str) -> Vec<i32> {
        self.get_string_list(section, key)
            .into_iter()
            .filter_map(|piece| match <i32 as FromConfigValue>::parse(&piece) {
                Some(n) => Some(n),
                None => {
                    warn!(section, key, "invalid integer in list: {piece}");
                    None
                }
            })
            .collect()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.table.contains_key(&section.to_ascii_lowercase())
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.lookup(section, key).is_some()
    }

    /// Keys of a section, in sorted order.
    ///
    /// The section name is used as given, NOT lowercased, so only lowercase
    /// names find anything. Existing callers always pass lowercase literals.
    pub fn section_keys(&self, section: &str) -> Vec<String> {
        self.table
            .get(section)
            .map(|keys| keys.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Names of every section that holds at least one key, lowercased.
    pub fn sections(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
