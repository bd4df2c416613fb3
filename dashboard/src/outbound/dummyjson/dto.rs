//! DTOs for decoding DummyJSON user responses.
//!
//! Records already carry the upstream camelCase shape, so the listing
//! envelope is the only transport-specific type. Decoding checks the one
//! invariant the domain relies on: ids are unique within a listing.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::UserRecord;

#[derive(Debug, Deserialize)]
pub(super) struct UsersPageDto {
    pub(super) users: Vec<UserRecord>,
    #[serde(default)]
    pub(super) total: Option<u64>,
}

impl UsersPageDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<UserRecord>, String> {
        let mut seen = HashSet::with_capacity(self.users.len());
        if let Some(duplicate) = self.users.iter().find(|user| !seen.insert(user.id)) {
            return Err(format!("listing repeats user id {}", duplicate.id));
        }
        Ok(self.users)
    }
}
