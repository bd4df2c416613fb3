//! Pure derivations over an in-memory user list.
//!
//! Every function here is deterministic in its inputs and preserves input
//! order. Users lacking a nested section never match a specific value for
//! that section and never contribute a value to distinct sets or counts.

use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{Rating, UserRecord, UserValidationError};

/// Selector text meaning "no constraint".
pub const ALL_SENTINEL: &str = "All";

/// Number of users shown in the home view's recent list.
pub const RECENT_USERS: usize = 5;

/// Either the "All" sentinel or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector<T> {
    /// No constraint.
    #[default]
    All,
    /// Exact match required.
    Exact(T),
}

impl<T: PartialEq> Selector<T> {
    /// Whether `candidate` passes this selector. An absent candidate only
    /// passes [`Selector::All`].
    pub fn admits(&self, candidate: Option<&T>) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => candidate == Some(expected),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SENTINEL),
            Self::Exact(value) => value.fmt(f),
        }
    }
}

impl FromStr for Selector<String> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(Self::All)
        } else {
            Ok(Self::Exact(s.to_owned()))
        }
    }
}

impl FromStr for Selector<Rating> {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Exact)
        }
    }
}

/// Criteria combined with logical AND.
///
/// # Examples
/// ```
/// use hr_dashboard::domain::{FilterCriteria, Selector};
///
/// let criteria = FilterCriteria::default()
///     .with_query("an")
///     .with_rating("5".parse().unwrap());
/// assert_eq!(criteria.department, Selector::All);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring; empty matches everyone.
    pub query: String,
    /// Department selector.
    pub department: Selector<String>,
    /// Rating selector.
    pub rating: Selector<Rating>,
}

impl FilterCriteria {
    /// Replace the free-text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Replace the department selector.
    pub fn with_department(mut self, department: Selector<String>) -> Self {
        self.department = department;
        self
    }

    /// Replace the rating selector.
    pub fn with_rating(mut self, rating: Selector<Rating>) -> Self {
        self.rating = rating;
        self
    }

    fn matches(&self, needle: &str, user: &UserRecord) -> bool {
        let matches_query = needle.is_empty()
            || [&user.first_name, &user.last_name, &user.email]
                .into_iter()
                .any(|field| contains_folded(field, needle));
        let department = user.department().map(str::to_owned);
        matches_query
            && self.department.admits(department.as_ref())
            && self.rating.admits(Some(&user.rating))
    }
}

/// Aggregate counts shown on the home view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    /// Number of users.
    pub total: usize,
    /// Distinct roles.
    pub unique_roles: usize,
    /// Distinct departments.
    pub unique_departments: usize,
    /// Distinct countries.
    pub unique_countries: usize,
}

/// Keep users matching every criterion, in input order.
///
/// The query is matched against first name, last name and email.
pub fn filter_users<'a>(users: &'a [UserRecord], criteria: &FilterCriteria) -> Vec<&'a UserRecord> {
    let needle = criteria.query.to_lowercase();
    users
        .iter()
        .filter(|user| criteria.matches(&needle, user))
        .collect()
}

/// Distinct departments in ascending lexicographic order.
pub fn distinct_departments(users: &[UserRecord]) -> Vec<String> {
    users
        .iter()
        .filter_map(UserRecord::department)
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Count users and the distinct roles, departments and countries among them.
pub fn summary_counts(users: &[UserRecord]) -> SummaryCounts {
    SummaryCounts {
        total: users.len(),
        unique_roles: count_distinct(users, UserRecord::role),
        unique_departments: count_distinct(users, UserRecord::department),
        unique_countries: count_distinct(users, UserRecord::country),
    }
}

/// Home-view search over first name, last name, role and department.
pub fn search_directory<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            [
                Some(user.first_name.as_str()),
                Some(user.last_name.as_str()),
                user.role(),
                user.department(),
            ]
            .into_iter()
            .flatten()
            .any(|field| contains_folded(field, &needle))
        })
        .collect()
}

/// The first `count` users in source order.
pub fn recent_users(users: &[UserRecord], count: usize) -> &[UserRecord] {
    users.get(..count.min(users.len())).unwrap_or_default()
}

fn count_distinct(users: &[UserRecord], field: fn(&UserRecord) -> Option<&str>) -> usize {
    users.iter().filter_map(field).collect::<HashSet<_>>().len()
}

fn contains_folded(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
