//! Fixed vocabularies sampled by the generator.

/// Departments an employee can belong to.
pub const DEPARTMENTS: &[&str] = &[
    "Accounting",
    "Business Development",
    "Engineering",
    "Human Resources",
    "Legal",
    "Marketing",
    "Product Management",
    "Research and Development",
    "Sales",
    "Support",
];

/// Directory roles; `user` dominates, as in the upstream dataset.
pub const ROLES: &[&str] = &["admin", "moderator", "user"];

/// Job titles.
pub const TITLES: &[&str] = &[
    "Analyst",
    "Associate",
    "Director",
    "Engineer",
    "Manager",
    "Specialist",
    "Team Lead",
];

/// Countries with a representative city each.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("Canada", "Toronto"),
    ("Germany", "Berlin"),
    ("India", "Bengaluru"),
    ("Ireland", "Dublin"),
    ("United Kingdom", "Manchester"),
    ("United States", "Denver"),
];

/// Lower-case ASCII alphanumerics of `raw`, used for email local parts.
pub(crate) fn email_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
