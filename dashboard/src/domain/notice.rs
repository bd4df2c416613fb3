//! Short-lived acknowledgements shown after an operator action.

use std::fmt;

use crate::domain::bookmarks::{BookmarkError, ToggleOutcome};
use crate::domain::{LoginError, UserId, UserRecord};

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// The action was refused or failed.
    Error,
}

/// One toast-style message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Tone.
    pub level: NoticeLevel,
    /// Text shown to the operator.
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// `user` was added to the bookmark set.
    pub fn bookmarked(user: &UserRecord) -> Self {
        Self::success(format!("{} has been bookmarked!", user.first_name))
    }

    /// `user` was removed from the bookmark set.
    pub fn unbookmarked() -> Self {
        Self::success("User removed from bookmarks.")
    }

    /// Outcome of a toggle on `user`.
    pub fn toggled(user: &UserRecord, outcome: ToggleOutcome) -> Self {
        match outcome {
            ToggleOutcome::Added => Self::bookmarked(user),
            ToggleOutcome::Removed => Self::unbookmarked(),
        }
    }

    /// A refused or failed bookmark mutation on `user`.
    pub fn bookmark_failed(user: &UserRecord, err: &BookmarkError) -> Self {
        match err {
            BookmarkError::AlreadyBookmarked { .. } => {
                Self::error(format!("{} is already bookmarked.", user.first_name))
            }
            BookmarkError::Storage { .. } => Self::storage_failed(err),
        }
    }

    /// The bookmark set could not be written.
    pub fn storage_failed(err: &BookmarkError) -> Self {
        Self::error(format!("Could not save bookmarks: {err}"))
    }

    /// A bookmarks-view action named a user outside the set.
    pub fn not_bookmarked(id: UserId) -> Self {
        Self::error(format!("User {id} is not bookmarked."))
    }

    /// A rejected login attempt.
    pub fn login_failed(err: &LoginError) -> Self {
        match err {
            LoginError::MissingInput { .. } => Self::error("Please enter both username and password."),
            LoginError::InvalidCredentials => Self::error("Invalid username or password."),
            LoginError::Storage { .. } => Self::error(format!("Could not save session: {err}")),
        }
    }

    /// A user was added to the local listing.
    pub fn user_created(user: &UserRecord) -> Self {
        Self::success(format!("User {} {} created!", user.first_name, user.last_name))
    }

    /// Bookmarks view "Promote" acknowledgement.
    pub fn promoted(user: &UserRecord) -> Self {
        Self::success(format!("{} has been promoted successfully!", user.first_name))
    }

    /// Bookmarks view "Assign to project" acknowledgement.
    pub fn assigned(user: &UserRecord) -> Self {
        Self::success(format!("{} assigned to project!", user.first_name))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{marker}] {}", self.message)
    }
}
