//! Generated employee record type.
//!
//! This type is independent of dashboard domain types to avoid circular
//! dependencies; it carries plain strings and numbers only.

use serde::{Deserialize, Serialize};

/// A generated example employee.
///
/// # Example
///
/// ```
/// use example_data::ExampleEmployeeSeed;
///
/// let employee = ExampleEmployeeSeed {
///     id: 1,
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     email: "ada.lovelace@example.com".to_owned(),
///     age: 36,
///     phone: "+1 555-0100".to_owned(),
///     role: "admin".to_owned(),
///     department: "Engineering".to_owned(),
///     title: "Director".to_owned(),
///     city: "Denver".to_owned(),
///     country: "United States".to_owned(),
/// };
///
/// assert_eq!(employee.first_name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEmployeeSeed {
    /// Sequential identifier starting at 1.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email derived from the name.
    pub email: String,
    /// Age in years.
    pub age: u32,
    /// Contact phone number.
    pub phone: String,
    /// Directory role.
    pub role: String,
    /// Company department.
    pub department: String,
    /// Job title.
    pub title: String,
    /// Office city.
    pub city: String,
    /// Office country.
    pub country: String,
}
