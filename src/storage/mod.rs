//! Persisted key-value storage for the theme preference.
//!
//! The preference lives in a per-origin string store, the same shape as a
//! browser's local storage. This module provides:
//!
//! - [`PreferenceStore`]: the storage seam
//! - [`MemoryStore`]: a process-local map
//! - [`FileStore`]: one JSON file per origin on disk
//! - [`UnavailableStore`]: storage that is switched off

mod file;
mod memory;

pub use file::{FileStore, DEFAULT_ORIGIN};
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Error raised by a [`PreferenceStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or could not be located.
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed storage file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store scoped to one origin.
pub trait PreferenceStore {
    /// Reads a value. A missing key is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a key. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// A store whose every operation fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_store_fails_everything() {
        let mut store = UnavailableStore;
        assert!(matches!(store.get_item("theme"), Err(StorageError::Unavailable)));
        assert!(matches!(
            store.set_item("theme", "dark"),
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(store.remove_item("theme"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());
        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
    }
}
