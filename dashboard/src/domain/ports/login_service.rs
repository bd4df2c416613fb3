//! Driving port for credential checks.
//!
//! The session service asks this port whether a credential pair is valid
//! without knowing where the answer comes from.

use crate::domain::{LoginCredentials, LoginError};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
pub trait LoginService: Send + Sync {
    /// Accept or reject the supplied credentials.
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), LoginError>;
}

/// Username accepted by [`FixtureLoginService`].
pub const FIXTURE_USERNAME: &str = "admin";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_PASSWORD: &str = "Admin@123";

/// Hardcoded single-operator check.
///
/// This is a placeholder, not an authentication scheme: one plain-text pair,
/// no hashing, no rate limiting, no identity. Anyone who can write the
/// session flag into storage is treated as logged in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

impl LoginService for FixtureLoginService {
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), LoginError> {
        if credentials.username() == FIXTURE_USERNAME
            && credentials.password() == FIXTURE_PASSWORD
        {
            Ok(())
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", "Admin@123", true)]
    #[case("admin", "admin@123", false)]
    #[case("Admin", "Admin@123", false)]
    #[case(" admin", "Admin@123", false)]
    #[case("admin", "Admin@123 ", false)]
    #[case("other", "password", false)]
    fn fixture_login_accepts_only_the_exact_pair(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        let result = FixtureLoginService.authenticate(&creds);
        match (should_succeed, result) {
            (true, Ok(())) => {}
            (false, Err(err)) => assert_eq!(err, LoginError::InvalidCredentials),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(())) => panic!("expected failure for {username:?}/{password:?}"),
        }
    }
}
