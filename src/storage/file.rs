//! Storage backed by a flat `preferences.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use langcell::storage::{FileStorage, Storage};
//!
//! let storage = FileStorage::default_location().expect("no config directory");
//! storage.set_item("bl-lang", "en").expect("failed to save");
//! assert_eq!(storage.get_item("bl-lang").unwrap().as_deref(), Some("en"));
//! ```

use super::Storage;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_FILE: &str = "preferences.toml";
const APP_NAME: &str = "langcell";

type Entries = toml::Table;

/// Text entries kept in a TOML file, one `key = "value"` line each.
///
/// The file may be shared with other settings of any TOML type. Those are
/// kept on write; a key holding a non-string value reads as absent.
///
/// The file is read on every access, so edits made by another handle to the
/// same path are picked up. Writes go to a sibling temporary file that is
/// then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage in the file at `path`. Nothing is touched until first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/langcell/preferences.toml`, if the platform has a config dir.
    pub fn default_location() -> Option<Self> {
        Self::in_app_dir(APP_NAME)
    }

    /// `<config dir>/<app_name>/preferences.toml`.
    pub fn in_app_dir(app_name: &str) -> Option<Self> {
        dirs::config_dir().map(|mut path| {
            path.push(app_name);
            path.push(STORAGE_FILE);
            Self { path }
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(entries)?;
        let staging = self.staging_path();
        fs::write(&staging, content)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.load()?.remove(key) {
            Some(toml::Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::debug!(key, kind = other.type_str(), "ignoring non-string storage entry");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.load().unwrap_or_else(|err| {
            tracing::debug!(path = %self.path.display(), %err, "discarding unreadable storage file");
            Entries::new()
        });
        entries.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.save(&entries)
    }
}
