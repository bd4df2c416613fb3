//! Offline user source backed by deterministic example employees.
//!
//! Employees are generated once from a seed when the source is built, so
//! every fetch serves the same records and ids stay stable for `show`.

use async_trait::async_trait;
use example_data::{ExampleEmployeeSeed, GenerationError, generate_example_employees};
use tracing::debug;

use crate::domain::ports::{UserSource, UserSourceError};
use crate::domain::{Address, Company, UserId, UserRecord, avatar_url};

/// User source serving generated employees instead of the remote dataset.
#[derive(Debug, Clone)]
pub struct ExampleUserSource {
    users: Vec<UserRecord>,
}

impl ExampleUserSource {
    /// Generate `count` employees from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the generator rejects the request.
    pub fn new(seed: u64, count: usize) -> Result<Self, GenerationError> {
        let users: Vec<UserRecord> = generate_example_employees(seed, count)?
            .into_iter()
            .map(employee_to_user)
            .collect();
        debug!(seed, count = users.len(), "example employees generated");
        Ok(Self { users })
    }
}

fn employee_to_user(employee: ExampleEmployeeSeed) -> UserRecord {
    let id = UserId::new(employee.id);
    UserRecord {
        email: employee.email,
        age: employee.age,
        image: avatar_url(id),
        role: Some(employee.role),
        company: Some(Company {
            department: Some(employee.department),
            title: Some(employee.title),
            ..Company::default()
        }),
        address: Some(Address {
            city: Some(employee.city),
            country: Some(employee.country),
            ..Address::default()
        }),
        phone: Some(employee.phone),
        ..UserRecord::new(id, employee.first_name, employee.last_name)
    }
}

#[async_trait]
impl UserSource for ExampleUserSource {
    async fn fetch_users(&self, limit: u32) -> Result<Vec<UserRecord>, UserSourceError> {
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.users.iter().take(take).cloned().collect())
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, UserSourceError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| UserSourceError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn source() -> ExampleUserSource {
        ExampleUserSource::new(42, 10).expect("example source")
    }

    #[tokio::test]
    async fn listing_is_stable_across_fetches() {
        let source = source();
        let first = source.fetch_users(10).await.expect("first fetch");
        let second = source.fetch_users(10).await.expect("second fetch");
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(208, 10)]
    #[tokio::test]
    async fn listing_honours_the_limit(#[case] limit: u32, #[case] expected: usize) {
        let users = source().fetch_users(limit).await.expect("fetch");
        assert_eq!(users.len(), expected);
    }

    #[tokio::test]
    async fn records_carry_nested_sections() {
        let user = source().fetch_user(UserId::new(3)).await.expect("user 3");
        assert!(user.department().is_some());
        assert!(user.country().is_some());
        assert!(user.role().is_some());
        assert_eq!(user.image, "https://i.pravatar.cc/80?u=3");
        assert!(!user.rating.is_rated());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let error = source()
            .fetch_user(UserId::new(11))
            .await
            .expect_err("absent");
        assert_eq!(error, UserSourceError::not_found(UserId::new(11)));
    }

    #[test]
    fn oversized_requests_are_rejected() {
        assert!(matches!(
            ExampleUserSource::new(1, 5_000),
            Err(GenerationError::TooManyEmployees { .. })
        ));
    }
}
