//! Directory-backed `KeyValueStore` adapter.

use std::io;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::{TEMP_PREFIX, write_atomic};
use crate::domain::ports::{KeyValueStore, KeyValueStoreError};

/// Key/value store keeping one file per key inside a data directory.
///
/// Access is confined to the directory handle; keys are restricted to a
/// single plain file name so no key can escape it.
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Open `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(root: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        debug!(%root, "opened data directory");
        Ok(Self::from_dir(dir))
    }

    /// Wrap an already opened directory handle.
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn validate_key(key: &str) -> Result<&str, KeyValueStoreError> {
    let valid = !key.is_empty()
        && !key.starts_with(TEMP_PREFIX)
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if valid {
        Ok(key)
    } else {
        Err(KeyValueStoreError::invalid_key(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let name = validate_key(key)?;
        match self.dir.read_to_string(name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyValueStoreError::read(key, err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let name = validate_key(key)?;
        write_atomic(&self.dir, name, value)
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let name = validate_key(key)?;
        match self.dir.remove_file(name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyValueStoreError::write(key, err.to_string())),
        }
    }
}
