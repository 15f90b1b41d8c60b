//! Durable key-value preferences

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Key suffix the theme is stored under
pub const THEME_KEY: &str = "appTheme";

/// Storage key for `client_id`'s theme
#[must_use]
pub fn theme_key(client_id: &str) -> String {
    format!("{client_id}/{THEME_KEY}")
}

/// Errors raised by a preference backend
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Reading or writing the backing file failed
    #[error("Preference file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded
    #[error("Preference serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value storage that outlives a session
pub trait PreferenceStore: Send + Sync + fmt::Debug {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept in a JSON object on disk
///
/// The whole file is rewritten on every `set`; entries are cached in memory
/// after the initial read. `set` blocks on file I/O while holding the entry
/// lock so writes land in order; async callers run it on the blocking pool.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFilePreferences {
    /// Open (or lazily create) the preference file at `path`
    ///
    /// A missing file starts empty. A corrupt file is logged and replaced on
    /// the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!("Ignoring unreadable preference file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {} preference entries from {}", entries.len(), path.display());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(&*entries)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// Preferences that live only as long as the process
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
