//! Domain primitives, services and ports.
//!
//! Purpose: hold every business rule of the dashboard behind strongly typed
//! entities and small services. Adapters in `outbound` and the CLI in
//! `inbound` depend on this module; it depends on neither.
//!
//! Public surface:
//! - UserRecord, UserId, Rating: directory records and their identifiers.
//! - SessionService, AuthGate: the persisted session flag and its guard.
//! - BookmarkStore: the persisted bookmark set.
//! - filter_users, summary_counts and friends: pure listing derivations.
//! - UserDirectory, UsersView: upstream fetches and listing load state.

pub mod auth;
pub mod bookmarks;
pub mod derivation;
pub mod directory;
pub mod notice;
pub mod ports;
pub mod session;
pub mod user;
pub mod user_draft;

pub use self::auth::{LoginCredentials, LoginError, LoginField};
pub use self::bookmarks::{BookmarkError, BookmarkStore, ToggleOutcome};
pub use self::derivation::{
    ALL_SENTINEL, FilterCriteria, RECENT_USERS, Selector, SummaryCounts, distinct_departments,
    filter_users, recent_users, search_directory, summary_counts,
};
pub use self::directory::{DEFAULT_FETCH_LIMIT, LoadState, LoadTicket, UserDirectory, UsersView};
pub use self::notice::{Notice, NoticeLevel};
pub use self::session::{AuthGate, GateOutcome, Route, SessionError, SessionService, SessionState};
pub use self::user::{
    Address, Bank, Company, Crypto, Hair, Rating, UserId, UserRecord, UserValidationError,
};
pub use self::user_draft::{
    DraftError, DraftField, DraftIssue, IdsExhausted, NewUserDraft, avatar_url, create_user,
};
