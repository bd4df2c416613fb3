//! Plain-text rendering of views and notices.
//!
//! Every function writes complete lines to the supplied writer and returns
//! the writer's I/O error untouched.

use std::io::{self, Write};

use crate::domain::ports::UserSourceError;
use crate::domain::{
    DraftError, Notice, Rating, Route, SessionState, SummaryCounts, UserId, UserRecord,
};

const NOT_AVAILABLE: &str = "Not Available";
const NA: &str = "N/A";

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NA)
}

fn measure(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("{v} {unit}"))
}

fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.stars());
    let empty = usize::from(Rating::MAX).saturating_sub(filled);
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub(super) fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{notice}")
}

pub(super) fn redirect<W: Write>(out: &mut W, route: Route) -> io::Result<()> {
    writeln!(out, "Please log in to continue. Redirecting to {route}")
}

pub(super) fn navigated<W: Write>(out: &mut W, message: &str, route: Route) -> io::Result<()> {
    writeln!(out, "{message} Redirecting to {route}")
}

pub(super) fn status<W: Write>(out: &mut W, state: SessionState) -> io::Result<()> {
    match state {
        SessionState::Authenticated => writeln!(out, "Logged in"),
        SessionState::Unauthenticated => writeln!(out, "Logged out"),
    }
}

pub(super) fn fetch_failed<W: Write>(out: &mut W, err: &UserSourceError) -> io::Result<()> {
    writeln!(out, "[error] Failed to load users: {err}")
}

pub(super) fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "== {title} ==")
}

pub(super) fn empty<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

/// One listing line; `bookmarked` adds a marker.
pub(super) fn user_card<W: Write>(
    out: &mut W,
    user: &UserRecord,
    bookmarked: bool,
) -> io::Result<()> {
    write!(
        out,
        "#{} {} <{}> | Age: {} | Dept: {}",
        user.id,
        user.full_name(),
        user.email,
        user.age,
        or_not_available(user.department()),
    )?;
    if user.rating.is_rated() {
        write!(out, " | {}", stars(user.rating))?;
    }
    if bookmarked {
        write!(out, " [bookmarked]")?;
    }
    writeln!(out)
}

pub(super) fn user_cards<'a, W: Write>(
    out: &mut W,
    users: impl IntoIterator<Item = &'a UserRecord>,
    is_bookmarked: impl Fn(UserId) -> bool,
) -> io::Result<()> {
    for user in users {
        user_card(out, user, is_bookmarked(user.id))?;
    }
    Ok(())
}

pub(super) fn summary<W: Write>(out: &mut W, counts: &SummaryCounts) -> io::Result<()> {
    writeln!(out, "Total Users: {}", counts.total)?;
    writeln!(out, "Roles: {}", counts.unique_roles)?;
    writeln!(out, "Departments: {}", counts.unique_departments)?;
    writeln!(out, "Countries: {}", counts.unique_countries)
}

pub(super) fn departments<W: Write>(out: &mut W, departments: &[String]) -> io::Result<()> {
    for department in departments {
        writeln!(out, "{department}")?;
    }
    Ok(())
}

pub(super) fn draft_errors<W: Write>(out: &mut W, err: &DraftError) -> io::Result<()> {
    for issue in &err.issues {
        writeln!(out, "[error] {}: {}", issue.field, issue.message)?;
    }
    Ok(())
}

/// Employee detail view. Absent values fall back to "Not Available", or
/// "N/A" inside composite address lines.
pub(super) fn detail<W: Write>(out: &mut W, user: &UserRecord) -> io::Result<()> {
    writeln!(out, "{}", user.full_name())?;
    writeln!(out, "{}", user.email)?;
    writeln!(out, "{}", or_not_available(user.phone.as_deref()))?;

    heading(out, "Personal Info")?;
    writeln!(out, "Age: {}", user.age)?;
    writeln!(out, "Gender: {}", or_not_available(user.gender.as_deref()))?;
    writeln!(out, "Username: {}", or_not_available(user.username.as_deref()))?;
    writeln!(out, "Birth Date: {}", or_not_available(user.birth_date.as_deref()))?;
    writeln!(out, "Blood Group: {}", or_not_available(user.blood_group.as_deref()))?;
    writeln!(out, "Eye Color: {}", or_not_available(user.eye_color.as_deref()))?;
    let hair = user.hair.as_ref().map_or_else(
        || NOT_AVAILABLE.to_owned(),
        |hair| {
            format!(
                "{} ({})",
                or_na(hair.color.as_deref()),
                or_na(hair.kind.as_deref())
            )
        },
    );
    writeln!(out, "Hair: {hair}")?;
    writeln!(out, "Height: {}", measure(user.height, "cm"))?;
    writeln!(out, "Weight: {}", measure(user.weight, "kg"))?;

    heading(out, "Address")?;
    let address = user.address.as_ref();
    writeln!(
        out,
        "{}",
        or_not_available(address.and_then(|a| a.address.as_deref()))
    )?;
    writeln!(
        out,
        "{}, {}, {} - {}",
        or_na(address.and_then(|a| a.city.as_deref())),
        or_na(address.and_then(|a| a.state.as_deref())),
        or_na(address.and_then(|a| a.country.as_deref())),
        or_na(address.and_then(|a| a.postal_code.as_deref())),
    )?;

    heading(out, "University")?;
    writeln!(out, "{}", or_not_available(user.university.as_deref()))?;

    heading(out, "Company")?;
    let company = user.company.as_ref();
    writeln!(
        out,
        "Company: {}",
        or_not_available(company.and_then(|c| c.name.as_deref()))
    )?;
    writeln!(
        out,
        "Title: {}",
        or_not_available(company.and_then(|c| c.title.as_deref()))
    )?;
    writeln!(out, "Department: {}", or_not_available(user.department()))?;
    let office = company.and_then(|c| c.address.as_ref());
    writeln!(
        out,
        "Address: {}, {}, {}",
        or_na(office.and_then(|a| a.address.as_deref())),
        or_na(office.and_then(|a| a.city.as_deref())),
        or_na(office.and_then(|a| a.state.as_deref())),
    )?;

    heading(out, "Bank Info")?;
    let bank = user.bank.as_ref();
    writeln!(
        out,
        "Card Number: {}",
        or_not_available(bank.and_then(|b| b.card_number.as_deref()))
    )?;
    writeln!(
        out,
        "Card Type: {}",
        or_not_available(bank.and_then(|b| b.card_type.as_deref()))
    )?;
    writeln!(
        out,
        "Expire: {}",
        or_not_available(bank.and_then(|b| b.card_expire.as_deref()))
    )?;
    writeln!(
        out,
        "Currency: {}",
        or_not_available(bank.and_then(|b| b.currency.as_deref()))
    )?;
    writeln!(
        out,
        "IBAN: {}",
        or_not_available(bank.and_then(|b| b.iban.as_deref()))
    )?;

    heading(out, "Crypto")?;
    let crypto = user.crypto.as_ref();
    writeln!(
        out,
        "Coin: {}",
        or_not_available(crypto.and_then(|c| c.coin.as_deref()))
    )?;
    writeln!(
        out,
        "Wallet: {}",
        or_not_available(crypto.and_then(|c| c.wallet.as_deref()))
    )?;
    writeln!(
        out,
        "Network: {}",
        or_not_available(crypto.and_then(|c| c.network.as_deref()))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Hair};
    use rstest::rstest;

    fn rendered(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        render(&mut out).expect("render");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[rstest]
    #[case(0, "")]
    #[case(3, " | ★★★☆☆")]
    #[case(5, " | ★★★★★")]
    fn cards_show_stars_only_for_rated_users(#[case] stars: u8, #[case] suffix: &str) {
        let user = UserRecord::new(UserId::new(2), "Bo", "Kim")
            .with_email("bo@x.io")
            .with_department("Eng")
            .with_rating(Rating::new(stars).expect("rating"));
        let text = rendered(|out| user_card(out, &user, false));
        assert_eq!(text, format!("#2 Bo Kim <bo@x.io> | Age: 0 | Dept: Eng{suffix}\n"));
    }

    #[test]
    fn cards_mark_bookmarked_users_and_missing_departments() {
        let user = UserRecord::new(UserId::new(1), "Ann", "Lee");
        let text = rendered(|out| user_card(out, &user, true));
        assert_eq!(
            text,
            "#1 Ann Lee <> | Age: 0 | Dept: Not Available [bookmarked]\n"
        );
    }

    #[test]
    fn detail_falls_back_for_absent_sections() {
        let user = UserRecord::new(UserId::new(1), "Ann", "Lee");
        let text = rendered(|out| detail(out, &user));

        assert!(text.contains("Gender: Not Available\n"));
        assert!(text.contains("Hair: Not Available\n"));
        assert!(text.contains("Height: Not Available\n"));
        assert!(text.contains("N/A, N/A, N/A - N/A\n"));
        assert!(text.contains("Address: N/A, N/A, N/A\n"));
        assert!(text.contains("IBAN: Not Available\n"));
        assert!(text.contains("Network: Not Available"));
    }

    #[test]
    fn detail_shows_present_values() {
        let mut user = UserRecord::new(UserId::new(1), "Ann", "Lee").with_department("HR");
        user.address = Some(Address {
            city: Some("Leeds".to_owned()),
            country: Some("UK".to_owned()),
            ..Address::default()
        });
        user.hair = Some(Hair {
            color: Some("Brown".to_owned()),
            kind: None,
        });
        user.height = Some(170.5);

        let text = rendered(|out| detail(out, &user));

        assert!(text.contains("Leeds, N/A, UK - N/A\n"));
        assert!(text.contains("Hair: Brown (N/A)\n"));
        assert!(text.contains("Height: 170.5 cm\n"));
        assert!(text.contains("Department: HR\n"));
    }

    #[test]
    fn summary_lists_each_count() {
        let counts = SummaryCounts {
            total: 6,
            unique_roles: 3,
            unique_departments: 3,
            unique_countries: 1,
        };
        let text = rendered(|out| summary(out, &counts));
        assert_eq!(
            text,
            "Total Users: 6\nRoles: 3\nDepartments: 3\nCountries: 1\n"
        );
    }
}
