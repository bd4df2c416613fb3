//! Driven port for fetching directory users from a remote dataset.
//!
//! One call is one request: adapters must not retry, page, or cache.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{UserId, UserRecord};

define_port_error! {
    /// Errors surfaced while fetching users.
    pub enum UserSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user source transport failed: {message}",
        /// The request exceeded the client timeout.
        Timeout { message: String } =>
            "user source timed out: {message}",
        /// The source answered with a non-success status.
        Status { status: u16, message: String } =>
            "user source returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "user source response decode failed: {message}",
        /// The requested user does not exist.
        NotFound { id: UserId } =>
            "user {id} not found",
    }
}

/// Port for reading users from the upstream dataset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch up to `limit` users in source order.
    async fn fetch_users(&self, limit: u32) -> Result<Vec<UserRecord>, UserSourceError>;

    /// Fetch a single user for the detail view.
    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, UserSourceError>;
}

/// Fixture source serving a fixed list.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserSource {
    users: Vec<UserRecord>,
}

impl FixtureUserSource {
    /// Serve `users` in the given order.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_users(&self, limit: u32) -> Result<Vec<UserRecord>, UserSourceError> {
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.users.iter().take(take).cloned().collect())
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, UserSourceError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| UserSourceError::not_found(id))
    }
}
