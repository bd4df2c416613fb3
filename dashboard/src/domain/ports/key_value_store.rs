//! Driven port for operator-local key/value persistence.
//!
//! The dashboard keeps its session flag and bookmark set in a small
//! string-keyed store, mirroring browser local storage. Each key is replaced
//! as a whole; adapters must make a single `set` atomic so a reader never
//! observes a half-written value.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::define_port_error;

/// Storage key holding the session flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";
/// Storage key holding the JSON-encoded bookmark set.
pub const BOOKMARKS_KEY: &str = "bookmarkedUsers";

define_port_error! {
    /// Errors raised by key/value store adapters.
    pub enum KeyValueStoreError {
        /// The key cannot be mapped onto the backing medium.
        InvalidKey { key: String } =>
            "invalid storage key '{key}'",
        /// Reading a stored value failed.
        Read { key: String, message: String } =>
            "failed to read '{key}': {message}",
        /// Writing or removing a stored value failed.
        Write { key: String, message: String } =>
            "failed to write '{key}': {message}",
    }
}

/// Port for whole-value string persistence keyed by name.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Return the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

/// Process-local store used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given entries.
    ///
    /// # Examples
    /// ```
    /// use hr_dashboard::domain::ports::{InMemoryKeyValueStore, KeyValueStore};
    ///
    /// let store = InMemoryKeyValueStore::with_entries([("isLoggedIn", "true")]);
    /// assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("true"));
    /// ```
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }

    fn with_values<T>(
        &self,
        key: &str,
        op: impl FnOnce(&mut BTreeMap<String, String>) -> T,
    ) -> Result<T, KeyValueStoreError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|err| KeyValueStoreError::read(key, err.to_string()))?;
        Ok(op(&mut guard))
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        self.with_values(key, |values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.with_values(key, |values| {
            values.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.with_values(key, |values| {
            values.remove(key);
        })
    }
}
