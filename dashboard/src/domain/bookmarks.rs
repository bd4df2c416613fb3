//! Persisted bookmark set.
//!
//! Bookmarks are an ordered list of full user records, unique by id, stored
//! as one JSON array under a single key. Every mutation rewrites the whole
//! array; there is no incremental log. Two processes writing at once resolve
//! as last writer wins.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{BOOKMARKS_KEY, KeyValueStore};
use crate::domain::{UserId, UserRecord};

/// Failures raised by bookmark mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookmarkError {
    /// The user is already in the set; nothing changed.
    #[error("user {id} is already bookmarked")]
    AlreadyBookmarked {
        /// Id of the duplicate user.
        id: UserId,
    },
    /// The set could not be written back.
    #[error("failed to persist bookmarks: {message}")]
    Storage {
        /// Underlying storage or encoding failure.
        message: String,
    },
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The user was appended.
    Added,
    /// The user was removed.
    Removed,
}

/// Bookmark store hydrated lazily from storage.
pub struct BookmarkStore<S> {
    store: Arc<S>,
    bookmarks: Option<Vec<UserRecord>>,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    /// Create a store; nothing is read until first use.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            bookmarks: None,
        }
    }

    /// Re-read the persisted set, replacing the in-memory copy.
    ///
    /// Absent, unreadable or malformed data yields an empty set. Duplicate
    /// ids in stored data collapse to their first occurrence.
    pub fn load(&mut self) -> &[UserRecord] {
        let loaded = read_persisted(self.store.as_ref());
        self.bookmarks.insert(loaded).as_slice()
    }

    /// Current bookmarks in insertion order.
    pub fn list(&mut self) -> &[UserRecord] {
        self.hydrated().as_slice()
    }

    /// Whether `id` is bookmarked.
    pub fn contains(&mut self, id: UserId) -> bool {
        self.hydrated().iter().any(|user| user.id == id)
    }

    /// Look up a bookmarked user.
    pub fn get(&mut self, id: UserId) -> Option<&UserRecord> {
        self.hydrated().iter().find(|user| user.id == id)
    }

    /// Append `user` unless its id is already present.
    ///
    /// # Errors
    ///
    /// [`BookmarkError::AlreadyBookmarked`] leaves the set untouched;
    /// [`BookmarkError::Storage`] leaves both storage and memory untouched.
    pub fn add(&mut self, user: UserRecord) -> Result<(), BookmarkError> {
        if self.contains(user.id) {
            return Err(BookmarkError::AlreadyBookmarked { id: user.id });
        }
        let mut next = self.hydrated().clone();
        next.push(user);
        self.commit(next)
    }

    /// Remove `id` if present and persist the result.
    ///
    /// # Errors
    ///
    /// [`BookmarkError::Storage`] when the write fails.
    pub fn remove(&mut self, id: UserId) -> Result<(), BookmarkError> {
        let next: Vec<UserRecord> = self
            .hydrated()
            .iter()
            .filter(|user| user.id != id)
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Add when absent, remove when present.
    ///
    /// # Errors
    ///
    /// [`BookmarkError::Storage`] when the write fails.
    pub fn toggle(&mut self, user: UserRecord) -> Result<ToggleOutcome, BookmarkError> {
        if self.contains(user.id) {
            self.remove(user.id)?;
            Ok(ToggleOutcome::Removed)
        } else {
            self.add(user)?;
            Ok(ToggleOutcome::Added)
        }
    }

    fn hydrated(&mut self) -> &mut Vec<UserRecord> {
        let store = &self.store;
        self.bookmarks
            .get_or_insert_with(|| read_persisted(store.as_ref()))
    }

    fn commit(&mut self, next: Vec<UserRecord>) -> Result<(), BookmarkError> {
        let encoded = serde_json::to_string(&next).map_err(|err| BookmarkError::Storage {
            message: err.to_string(),
        })?;
        self.store
            .set(BOOKMARKS_KEY, &encoded)
            .map_err(|err| BookmarkError::Storage {
                message: err.to_string(),
            })?;
        debug!(count = next.len(), "bookmarks persisted");
        self.bookmarks = Some(next);
        Ok(())
    }
}

fn read_persisted<S: KeyValueStore + ?Sized>(store: &S) -> Vec<UserRecord> {
    let raw = match store.get(BOOKMARKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "bookmarks unreadable; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<UserRecord>>(&raw) {
        Ok(users) => dedupe(users),
        Err(err) => {
            warn!(error = %err, "stored bookmarks malformed; starting empty");
            Vec::new()
        }
    }
}

fn dedupe(users: Vec<UserRecord>) -> Vec<UserRecord> {
    let mut seen = HashSet::with_capacity(users.len());
    users
        .into_iter()
        .filter(|user| seen.insert(user.id))
        .collect()
}
