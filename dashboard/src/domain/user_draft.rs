//! Validated input for creating a user in the local listing.
//!
//! Created users live in the in-memory listing only; nothing here touches
//! storage or the upstream dataset.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{Company, Rating, UserId, UserRecord};

/// Form fields of the create-user draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Contact email.
    Email,
    /// Age in years.
    Age,
    /// Company department.
    Department,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Age => "age",
            Self::Department => "department",
        };
        f.write_str(label)
    }
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftIssue {
    /// Offending field.
    pub field: DraftField,
    /// Message shown next to the field.
    pub message: &'static str,
}

/// Every field problem found in a draft, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarise(.issues))]
pub struct DraftError {
    /// Field problems; never empty.
    pub issues: Vec<DraftIssue>,
}

impl DraftError {
    /// Whether `field` has a problem.
    pub fn has(&self, field: DraftField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn summarise(issues: &[DraftIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A create-user form that passed validation. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserDraft {
    first_name: String,
    last_name: String,
    email: String,
    age: u32,
    department: String,
}

impl NewUserDraft {
    /// Validate raw form input, reporting every failing field at once.
    ///
    /// # Errors
    ///
    /// [`DraftError`] listing each blank field, a malformed email, or an
    /// age that is not a positive integer.
    ///
    /// # Examples
    /// ```
    /// use hr_dashboard::domain::{DraftField, NewUserDraft};
    ///
    /// let err = NewUserDraft::try_from_parts("", "Lee", "nope", "0", "HR").unwrap_err();
    /// assert!(err.has(DraftField::FirstName));
    /// assert!(err.has(DraftField::Email));
    /// assert!(err.has(DraftField::Age));
    /// ```
    pub fn try_from_parts(
        first_name: &str,
        last_name: &str,
        email: &str,
        age: &str,
        department: &str,
    ) -> Result<Self, DraftError> {
        let mut issues = Vec::new();
        let mut require = |field, value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                issues.push(DraftIssue {
                    field,
                    message: required_message(field),
                });
                None
            } else {
                Some(trimmed.to_owned())
            }
        };

        let first_name = require(DraftField::FirstName, first_name);
        let last_name = require(DraftField::LastName, last_name);
        let email = require(DraftField::Email, email);
        let age = require(DraftField::Age, age);
        let department = require(DraftField::Department, department);

        // Format checks only run for fields that were present.
        let email = email.filter(|value| {
            let valid = email_pattern().is_match(value);
            if !valid {
                issues.push(DraftIssue {
                    field: DraftField::Email,
                    message: "Email is invalid",
                });
            }
            valid
        });
        let age = age.and_then(|value| {
            let parsed = value.parse::<u32>().ok().filter(|years| *years > 0);
            if parsed.is_none() {
                issues.push(DraftIssue {
                    field: DraftField::Age,
                    message: "Age must be a positive number",
                });
            }
            parsed
        });
        issues.sort_by_key(|issue| issue.field as u8);

        match (first_name, last_name, email, age, department) {
            (Some(first_name), Some(last_name), Some(email), Some(age), Some(department))
                if issues.is_empty() =>
            {
                Ok(Self {
                    first_name,
                    last_name,
                    email,
                    age,
                    department,
                })
            }
            _ => Err(DraftError { issues }),
        }
    }

    /// Trimmed first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Trimmed last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

fn required_message(field: DraftField) -> &'static str {
    match field {
        DraftField::FirstName => "First name is required",
        DraftField::LastName => "Last name is required",
        DraftField::Email => "Email is required",
        DraftField::Age => "Age is required",
        DraftField::Department => "Department is required",
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Unanchored: any `x@y.z` run inside the input is accepted.
        let pattern = r"\S+@\S+\.\S+";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Avatar URL for a locally created user.
pub fn avatar_url(id: UserId) -> String {
    format!("https://i.pravatar.cc/80?u={id}")
}

/// No id is left above the largest one in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot assign an id after user {last}")]
pub struct IdsExhausted {
    /// Largest id already in the listing.
    pub last: UserId,
}

/// Turn `draft` into a record and prepend it to `users`.
///
/// The new id is one past the largest id present, or 1 for an empty list.
/// The record starts unrated.
///
/// # Errors
///
/// [`IdsExhausted`] when the listing already holds `u32::MAX`; `users` is
/// left untouched.
pub fn create_user(
    users: &mut Vec<UserRecord>,
    draft: NewUserDraft,
) -> Result<UserRecord, IdsExhausted> {
    let next = match users.iter().map(|user| user.id).max() {
        None => 1,
        Some(last) => last.get().checked_add(1).ok_or(IdsExhausted { last })?,
    };
    let id = UserId::new(next);
    let mut record = UserRecord::new(id, draft.first_name, draft.last_name)
        .with_email(draft.email)
        .with_rating(Rating::UNRATED);
    record.age = draft.age;
    record.image = avatar_url(id);
    record.company = Some(Company {
        department: Some(draft.department),
        ..Company::default()
    });
    users.insert(0, record.clone());
    Ok(record)
}
