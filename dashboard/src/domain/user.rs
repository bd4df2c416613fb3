//! User directory records.
//!
//! `UserRecord` mirrors the upstream dataset shape (camelCase JSON) and is
//! also the persisted bookmark format. Nested sections are optional because
//! upstream and locally created records do not always carry them; accessors
//! return `Option` so callers decide how to present the absent case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors for user identifiers and ratings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The id was not a positive integer.
    #[error("user id must be a positive integer, got '{value}'")]
    InvalidId {
        /// Raw input that failed to parse.
        value: String,
    },
    /// The rating fell outside `0..=5`.
    #[error("rating must be between 0 and {max}, got {value}")]
    RatingOutOfRange {
        /// Upper bound of the accepted range.
        max: u8,
        /// Rejected value.
        value: u64,
    },
    /// The rating was not numeric.
    #[error("rating must be a number, got '{value}'")]
    InvalidRating {
        /// Raw input that failed to parse.
        value: String,
    },
}

/// Stable numeric user identifier assigned by the upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(|| UserValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

/// Client-assigned star rating.
///
/// ## Invariants
/// - Value lies in `0..=5`; `0` marks a record nobody has rated yet.
///
/// # Examples
/// ```
/// use hr_dashboard::domain::Rating;
///
/// let rating: Rating = "4".parse().unwrap();
/// assert_eq!(rating.stars(), 4);
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest rating a user can hold.
    pub const MAX: u8 = 5;
    /// Lowest rating handed out when annotating fetched users.
    pub const MIN_ASSIGNED: u8 = 1;
    /// Rating carried by records nobody has rated.
    pub const UNRATED: Self = Self(0);

    /// Validate and wrap a rating value.
    pub fn new(value: u8) -> Result<Self, UserValidationError> {
        Self::try_from(u64::from(value))
    }

    /// Number of stars.
    pub const fn stars(self) -> u8 {
        self.0
    }

    /// Whether a rating has been assigned.
    pub const fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u64> for Rating {
    type Error = UserValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|stars| *stars <= Self::MAX)
            .map(Self)
            .ok_or(UserValidationError::RatingOutOfRange {
                max: Self::MAX,
                value,
            })
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl FromStr for Rating {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|_| UserValidationError::InvalidRating {
                value: s.to_owned(),
            })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address attached to a user or their company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Employer details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Department within the company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Office address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Hair description shown on the detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hair {
    /// Hair colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Hair type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Payment card details from the upstream dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Card expiry as `MM/YY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_expire: Option<String>,
    /// Card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    /// Card network name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Account currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Account IBAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

/// Crypto wallet details from the upstream dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crypto {
    /// Coin name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Wallet address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    /// Chain the wallet lives on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

/// One user in the directory.
///
/// ## Invariants
/// - `id` is unique within a fetched listing and within the bookmark set.
/// - `rating` is attached client-side and is never sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Upstream identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Age in years; 0 when unknown.
    #[serde(default)]
    pub age: u32,
    /// Avatar URL.
    #[serde(default)]
    pub image: String,
    /// Access role such as `admin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Employer and department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Home address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Performance rating drawn on fetch.
    #[serde(default)]
    pub rating: Rating,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Upstream login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Gender as reported upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Birth date as reported upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Blood group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    /// Eye colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Hair description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair: Option<Hair>,
    /// University attended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// Payment card details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    /// Crypto wallet details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto: Option<Crypto>,
}

impl UserRecord {
    /// Build a record carrying only the core display fields.
    ///
    /// # Examples
    /// ```
    /// use hr_dashboard::domain::{UserId, UserRecord};
    ///
    /// let user = UserRecord::new(UserId::new(1), "Ann", "Lee")
    ///     .with_department("HR");
    /// assert_eq!(user.full_name(), "Ann Lee");
    /// assert_eq!(user.department(), Some("HR"));
    /// ```
    pub fn new(id: UserId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: String::new(),
            age: 0,
            image: String::new(),
            role: None,
            company: None,
            address: None,
            rating: Rating::UNRATED,
            phone: None,
            username: None,
            gender: None,
            birth_date: None,
            blood_group: None,
            eye_color: None,
            height: None,
            weight: None,
            hair: None,
            university: None,
            bank: None,
            crypto: None,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the company department, creating the company section if needed.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.company.get_or_insert_with(Company::default).department = Some(department.into());
        self
    }

    /// Set the country, creating the address section if needed.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.address.get_or_insert_with(Address::default).country = Some(country.into());
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department from the nested company section.
    pub fn department(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.department.as_deref())
    }

    /// Country from the nested address section.
    pub fn country(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|address| address.country.as_deref())
    }

    /// Role, when the source provides one.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
