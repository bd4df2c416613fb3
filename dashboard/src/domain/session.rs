//! Session flag persistence and the gate in front of protected views.
//!
//! The session is a single persisted flag: present with value `"true"` means
//! logged in, anything else means logged out. There is no token, expiry or
//! identity, and nothing is cached in memory; every check re-reads storage so
//! the state at start-up is whatever storage says.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{KeyValueStore, LoginService, SESSION_FLAG_KEY};
use crate::domain::{LoginCredentials, LoginError, UserId};

const SESSION_FLAG_VALUE: &str = "true";

/// Views a navigation side-effect can lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login form.
    Login,
    /// Landing view with summary counts.
    Home,
    /// Full user listing.
    Users,
    /// Bookmarked users.
    Bookmarks,
    /// Detail view for one employee.
    Employee(UserId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("/login"),
            Self::Home => f.write_str("/"),
            Self::Users => f.write_str("/users"),
            Self::Bookmarks => f.write_str("/bookmarks"),
            Self::Employee(id) => write!(f, "/employee/{id}"),
        }
    }
}

/// Two-state session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No valid flag in storage.
    Unauthenticated,
    /// Flag present.
    Authenticated,
}

/// Failures while clearing the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The flag could not be removed from storage.
    #[error("failed to clear session: {message}")]
    Storage {
        /// Underlying storage failure.
        message: String,
    },
}

/// Session store service: login, logout and flag reads.
pub struct SessionService<S, L> {
    store: Arc<S>,
    login_service: Arc<L>,
}

impl<S, L> Clone for SessionService<S, L> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            login_service: Arc::clone(&self.login_service),
        }
    }
}

impl<S, L> SessionService<S, L>
where
    S: KeyValueStore,
    L: LoginService,
{
    /// Create a service over the given store and credential check.
    pub fn new(store: Arc<S>, login_service: Arc<L>) -> Self {
        Self {
            store,
            login_service,
        }
    }

    /// Whether storage currently holds the session flag.
    ///
    /// A storage read failure is logged and treated as logged out.
    pub fn is_authenticated(&self) -> bool {
        read_flag(self.store.as_ref())
    }

    /// Current state derived from storage.
    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Validate inputs, check the credential pair, and persist the flag.
    ///
    /// Returns the route to navigate to on success.
    ///
    /// # Errors
    ///
    /// [`LoginError::MissingInput`] for a blank field,
    /// [`LoginError::InvalidCredentials`] for an unknown pair, and
    /// [`LoginError::Storage`] when the flag cannot be written. The flag is
    /// left untouched on every error.
    pub fn login(&self, username: &str, password: &str) -> Result<Route, LoginError> {
        let credentials = LoginCredentials::try_from_parts(username, password)?;
        self.login_service.authenticate(&credentials)?;
        self.store
            .set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)
            .map_err(|err| LoginError::Storage {
                message: err.to_string(),
            })?;
        info!(username = credentials.username(), "operator logged in");
        Ok(Route::Home)
    }

    /// Clear the flag and return the login route.
    ///
    /// Logging out while logged out succeeds.
    ///
    /// # Errors
    ///
    /// [`SessionError::Storage`] when storage refuses the removal.
    pub fn logout(&self) -> Result<Route, SessionError> {
        self.store
            .remove(SESSION_FLAG_KEY)
            .map_err(|err| SessionError::Storage {
                message: err.to_string(),
            })?;
        info!("operator logged out");
        Ok(Route::Login)
    }
}

/// Result of activating an [`AuthGate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// Session present; wrapped content was rendered.
    Render(T),
    /// Session absent; navigate here and render nothing.
    Redirect(Route),
}

/// Guard wrapping a protected view.
///
/// Each activation reads storage afresh; gates share no session object.
pub struct AuthGate<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> AuthGate<S> {
    /// Create a gate reading from `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run `render` only when the session flag is present.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hr_dashboard::domain::ports::InMemoryKeyValueStore;
    /// use hr_dashboard::domain::{AuthGate, GateOutcome, Route};
    ///
    /// let gate = AuthGate::new(Arc::new(InMemoryKeyValueStore::new()));
    /// assert_eq!(gate.activate(|| "content"), GateOutcome::Redirect(Route::Login));
    /// ```
    pub fn activate<T>(&self, render: impl FnOnce() -> T) -> GateOutcome<T> {
        if read_flag(self.store.as_ref()) {
            GateOutcome::Render(render())
        } else {
            GateOutcome::Redirect(Route::Login)
        }
    }
}

fn read_flag<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match store.get(SESSION_FLAG_KEY) {
        Ok(value) => value.as_deref() == Some(SESSION_FLAG_VALUE),
        Err(err) => {
            warn!(error = %err, "session flag unreadable; treating as logged out");
            false
        }
    }
}

#[cfg(test)]
mod tests;
