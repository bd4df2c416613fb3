//! Directory fetches and the listing view's load state.
//!
//! [`UserDirectory`] issues exactly one upstream request per call and, for
//! the listing view, attaches a fresh rating to every record. Ratings are
//! regenerated on every fetch and never written back.
//!
//! [`UsersView`] tracks the listing's load state. A fetch is started with
//! [`UsersView::begin_load`], which hands out a [`LoadTicket`]; the ticket only
//! applies its result when the view is still alive and no newer load has
//! started, so late completions are discarded instead of cancelled.

use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, warn};

use crate::domain::ports::{RatingSource, UserSource, UserSourceError};
use crate::domain::{UserId, UserRecord};

/// Default number of users requested from the upstream dataset.
pub const DEFAULT_FETCH_LIMIT: u32 = 208;

/// Application service over the user source and rating source ports.
pub struct UserDirectory<U, R> {
    source: Arc<U>,
    ratings: Arc<R>,
    limit: u32,
}

impl<U, R> UserDirectory<U, R>
where
    U: UserSource,
    R: RatingSource,
{
    /// Create a directory requesting `limit` users per fetch.
    pub fn new(source: Arc<U>, ratings: Arc<R>, limit: u32) -> Self {
        Self {
            source,
            ratings,
            limit,
        }
    }

    /// Fetch users and give each a fresh rating in `1..=5`.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`UserSourceError`] unchanged.
    pub async fn fetch_rated(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        let users = self.fetch_unrated().await?;
        Ok(users
            .into_iter()
            .map(|user| {
                let rating = self.ratings.next_rating();
                user.with_rating(rating)
            })
            .collect())
    }

    /// Fetch users exactly as the source returns them.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`UserSourceError`] unchanged.
    pub async fn fetch_unrated(&self) -> Result<Vec<UserRecord>, UserSourceError> {
        debug!(limit = self.limit, "fetching users");
        let users = self.source.fetch_users(self.limit).await?;
        debug!(count = users.len(), "users fetched");
        Ok(users)
    }

    /// Fetch one user for the detail view.
    ///
    /// # Errors
    ///
    /// [`UserSourceError::NotFound`] when the id is unknown, otherwise the
    /// source's transport or decode failure.
    pub async fn fetch_detail(&self, id: UserId) -> Result<UserRecord, UserSourceError> {
        debug!(%id, "fetching user detail");
        self.source.fetch_user(id).await
    }
}

/// Load state of the listing view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready(Vec<UserRecord>),
    /// The latest fetch failed; stays until the next load.
    Failed(String),
}

#[derive(Debug, Default)]
struct ViewSlot {
    generation: u64,
    state: LoadState,
}

/// Owner of the listing view's state. Dropping it invalidates every
/// outstanding [`LoadTicket`].
#[derive(Debug, Default)]
pub struct UsersView {
    slot: Arc<Mutex<ViewSlot>>,
}

impl UsersView {
    /// Create an idle view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter [`LoadState::Loading`] and return the ticket for this load.
    /// Any earlier ticket becomes stale.
    pub fn begin_load(&self) -> LoadTicket {
        let generation = match self.slot.lock() {
            Ok(mut slot) => {
                slot.generation = slot.generation.wrapping_add(1);
                slot.state = LoadState::Loading;
                slot.generation
            }
            Err(_) => {
                warn!("listing view state poisoned; load will be discarded");
                0
            }
        };
        LoadTicket {
            slot: Arc::downgrade(&self.slot),
            generation,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.slot
            .lock()
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }
}

/// Handle for applying one fetch result to a [`UsersView`].
#[derive(Debug)]
pub struct LoadTicket {
    slot: Weak<Mutex<ViewSlot>>,
    generation: u64,
}

impl LoadTicket {
    /// Apply `result` when the view is alive and this is the latest load.
    ///
    /// Returns whether the result was applied.
    pub fn complete(self, result: Result<Vec<UserRecord>, UserSourceError>) -> bool {
        let Some(shared) = self.slot.upgrade() else {
            debug!("listing view gone; discarding fetch result");
            return false;
        };
        let Ok(mut slot) = shared.lock() else {
            return false;
        };
        if slot.generation != self.generation {
            debug!(
                ticket = self.generation,
                latest = slot.generation,
                "stale fetch result discarded"
            );
            return false;
        }
        slot.state = match result {
            Ok(users) => LoadState::Ready(users),
            Err(err) => {
                warn!(error = %err, "failed to load users");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }
}
