//! Authentication primitives such as login credentials.
//!
//! Keep raw input handling outside the session service by exposing a
//! constructor that rejects blank fields before any credential comparison.

use std::fmt;

use zeroize::Zeroizing;

/// Login form field, used to report which input was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// The username input.
    Username,
    /// The password input.
    Password,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("username"),
            Self::Password => f.write_str("password"),
        }
    }
}

/// Failures returned by a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// A field was empty or whitespace only.
    #[error("{field} must not be blank")]
    MissingInput {
        /// First blank field encountered.
        field: LoginField,
    },
    /// The username/password pair was not recognised.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The session flag could not be written.
    #[error("failed to persist session: {message}")]
    Storage {
        /// Underlying storage failure.
        message: String,
    },
}

/// Login credentials with both fields known to be non-blank.
///
/// ## Invariants
/// - Neither field is empty once trimmed.
/// - Values are kept exactly as typed; comparisons are exact, so
///   `" admin "` is a different username from `"admin"`.
///
/// # Examples
/// ```
/// use hr_dashboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "Admin@123").unwrap();
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "Admin@123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginError> {
        if username.trim().is_empty() {
            return Err(LoginError::MissingInput {
                field: LoginField::Username,
            });
        }

        if password.trim().is_empty() {
            return Err(LoginError::MissingInput {
                field: LoginField::Password,
            });
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username as typed.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
