//! Deterministic employee generation from a seed.
//!
//! The same seed and count always produce identical output, so offline demos
//! and tests see stable data.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalogue::{COUNTRIES, DEPARTMENTS, TITLES, email_token};
use crate::error::GenerationError;
use crate::seed::ExampleEmployeeSeed;

/// Largest number of employees one call may generate.
pub const MAX_EMPLOYEES: usize = 1000;

/// Maximum number of attempts to generate a name with a usable email token.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Youngest generated age.
const MIN_AGE: u32 = 21;

/// Oldest generated age.
const MAX_AGE: u32 = 64;

/// Probability of the `admin` role (1 in 10).
const ADMIN_NUMERATOR: u32 = 1;

/// Probability of the `moderator` role among non-admins (2 in 10).
const MODERATOR_NUMERATOR: u32 = 2;

/// Denominator for role selection.
const ROLE_DENOMINATOR: u32 = 10;

/// Generates `count` employees from `seed`.
///
/// Ids run from 1 to `count` in generation order. Every employee has a
/// department, role, title and country drawn from the crate's fixed
/// vocabularies.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - `count` exceeds [`MAX_EMPLOYEES`]
/// - name generation fails after maximum retries
///
/// # Example
///
/// ```
/// use example_data::generate_example_employees;
///
/// let first = generate_example_employees(7, 5).expect("generated");
/// let second = generate_example_employees(7, 5).expect("generated");
/// assert_eq!(first, second);
/// ```
pub fn generate_example_employees(
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleEmployeeSeed>, GenerationError> {
    if count > MAX_EMPLOYEES {
        return Err(GenerationError::TooManyEmployees {
            requested: count,
            max: MAX_EMPLOYEES,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (1..)
        .take(count)
        .map(|id| generate_single_employee(&mut rng, id))
        .collect()
}

/// Generates a single employee with the provided RNG.
fn generate_single_employee(
    rng: &mut ChaCha8Rng,
    id: u32,
) -> Result<ExampleEmployeeSeed, GenerationError> {
    let (first_name, last_name, email) = generate_name(rng)?;
    let age = rng.random_range(MIN_AGE..=MAX_AGE);
    let phone = format!("+1 555-{:04}", rng.random_range(100..=9999_u32));
    let role = if rng.random_ratio(ADMIN_NUMERATOR, ROLE_DENOMINATOR) {
        "admin"
    } else if rng.random_ratio(MODERATOR_NUMERATOR, ROLE_DENOMINATOR) {
        "moderator"
    } else {
        "user"
    };
    let department = pick(rng, DEPARTMENTS);
    let title = pick(rng, TITLES);
    let (country, city) = COUNTRIES.choose(rng).copied().unwrap_or_default();

    Ok(ExampleEmployeeSeed {
        id,
        first_name,
        last_name,
        email,
        age,
        phone,
        role: role.to_owned(),
        department: department.to_owned(),
        title: title.to_owned(),
        city: city.to_owned(),
        country: country.to_owned(),
    })
}

/// Generates a first and last name plus an email derived from them.
///
/// Retries up to `MAX_NAME_ATTEMPTS` times when either name has no ASCII
/// alphanumerics to build an email from.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let (first_token, last_token) = (email_token(&first), email_token(&last));
        if !first_token.is_empty() && !last_token.is_empty() {
            let email = format!("{first_token}.{last_token}@example.com");
            return Ok((first, last, email));
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

fn pick<'a>(rng: &mut ChaCha8Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::catalogue::ROLES;

    fn employees(seed: u64, count: usize) -> Vec<ExampleEmployeeSeed> {
        generate_example_employees(seed, count).expect("generation should succeed")
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(24)]
    fn generates_requested_count(#[case] count: usize) {
        assert_eq!(employees(42, count).len(), count);
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let ids: Vec<u32> = employees(42, 10).iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn same_seed_produces_identical_employees() {
        assert_eq!(employees(42, 12), employees(42, 12));
    }

    #[test]
    fn different_seeds_produce_different_employees() {
        assert_ne!(employees(42, 12), employees(43, 12));
    }

    #[test]
    fn prefix_is_stable_when_count_grows() {
        let short = employees(9, 4);
        let long = employees(9, 8);
        assert_eq!(short.as_slice(), long.get(..4).expect("prefix"));
    }

    #[test]
    fn fields_come_from_the_vocabularies() {
        let departments: HashSet<&str> = DEPARTMENTS.iter().copied().collect();
        let roles: HashSet<&str> = ROLES.iter().copied().collect();
        let countries: HashSet<&str> = COUNTRIES.iter().map(|(country, _)| *country).collect();

        for employee in employees(42, 50) {
            assert!(departments.contains(employee.department.as_str()));
            assert!(roles.contains(employee.role.as_str()));
            assert!(countries.contains(employee.country.as_str()));
            assert!((MIN_AGE..=MAX_AGE).contains(&employee.age));
        }
    }

    #[test]
    fn emails_are_derived_from_names() {
        for employee in employees(5, 20) {
            let expected_prefix = format!(
                "{}.{}@",
                email_token(&employee.first_name),
                email_token(&employee.last_name)
            );
            assert!(
                employee.email.starts_with(&expected_prefix),
                "unexpected email {} for {} {}",
                employee.email,
                employee.first_name,
                employee.last_name
            );
        }
    }

    #[test]
    fn rejects_counts_above_the_maximum() {
        let result = generate_example_employees(1, MAX_EMPLOYEES + 1);
        assert_eq!(
            result,
            Err(GenerationError::TooManyEmployees {
                requested: MAX_EMPLOYEES + 1,
                max: MAX_EMPLOYEES,
            })
        );
    }
}
