use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::warn;
use tempfile::NamedTempFile;

use super::{PreferenceStore, StorageError};

const STORAGE_FILE: &str = "local_storage.json";

/// Origin used when none is configured.
pub const DEFAULT_ORIGIN: &str = "file://local";

/// File-backed store: one flat JSON object per origin.
///
/// The file lives at `<base>/<origin>/local_storage.json`, where the origin
/// is sanitized into a single directory name. Every write replaces the whole
/// file atomically through a sibling temp file; a missing file reads as an
/// empty store. A malformed file is reported on read and overwritten by the
/// next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for `origin` under `base`.
    pub fn new(base: impl AsRef<Path>, origin: &str) -> Self {
        let path = base
            .as_ref()
            .join(sanitize_origin(origin))
            .join(STORAGE_FILE);
        Self { path }
    }

    /// Creates a store under the platform data directory.
    ///
    /// Returns `None` when the platform has no data directory.
    pub fn in_data_dir(origin: &str) -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("portfolio"), origin))
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Loads the current items for a read-modify-write. A malformed file is
    /// discarded so one bad write cannot block persistence for good.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(e @ StorageError::Malformed { .. }) => {
                warn!("discarding unreadable preference file: {e}");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
        let raw = serde_json::to_string_pretty(items).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let mut file = NamedTempFile::new_in(parent).map_err(io_err)?;
        file.write_all(raw.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        file.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load_for_write()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load_for_write()?;
        items.remove(key);
        self.save(&items)
    }
}

/// Maps an origin such as `https://example.com:8080` to a directory name.
fn sanitize_origin(origin: &str) -> String {
    let name: String = origin
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let name = name.trim_matches('_');
    if name.is_empty() || name.chars().all(|c| c == '.') {
        "default".to_string()
    } else {
        name.to_string()
    }
}
