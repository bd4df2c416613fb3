//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod key_value_store;
mod login_service;
mod rating_source;
mod user_source;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{
    BOOKMARKS_KEY, InMemoryKeyValueStore, KeyValueStore, KeyValueStoreError, SESSION_FLAG_KEY,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FIXTURE_PASSWORD, FIXTURE_USERNAME, FixtureLoginService, LoginService};
#[cfg(test)]
pub use rating_source::MockRatingSource;
pub use rating_source::{FixtureRatingSource, RatingSource, ThreadRngRatings};
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserSource, UserSourceError};
