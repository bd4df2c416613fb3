//! Reqwest-backed DummyJSON user source.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into domain records. It issues one
//! request per call and never retries, pages or caches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::UsersPageDto;
use crate::domain::ports::{UserSource, UserSourceError};
use crate::domain::{UserId, UserRecord};

/// Public DummyJSON base URL.
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com";

const USER_AGENT: &str = "hr-dashboard/0.1";

/// User source performing HTTP GET requests against one DummyJSON base URL.
pub struct DummyJsonUserSource {
    client: Client,
    endpoint: Url,
}

impl DummyJsonUserSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = DummyJsonUserSource::new(endpoint, Duration::from_secs(10));
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    async fn get(&self, url: Url) -> Result<(StatusCode, Vec<u8>), UserSourceError> {
        debug!(%url, "requesting users");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl UserSource for DummyJsonUserSource {
    async fn fetch_users(&self, limit: u32) -> Result<Vec<UserRecord>, UserSourceError> {
        let url = users_url(&self.endpoint, limit)?;
        let (status, body) = self.get(url).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_users(&body)
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, UserSourceError> {
        let url = user_url(&self.endpoint, id)?;
        let (status, body) = self.get(url).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(UserSourceError::not_found(id));
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_user(&body)
    }
}

fn users_url(endpoint: &Url, limit: u32) -> Result<Url, UserSourceError> {
    let mut url = with_path(endpoint, &["users"])?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string());
    Ok(url)
}

fn user_url(endpoint: &Url, id: UserId) -> Result<Url, UserSourceError> {
    with_path(endpoint, &["users", &id.to_string()])
}

fn with_path(endpoint: &Url, segments: &[&str]) -> Result<Url, UserSourceError> {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| UserSourceError::transport(format!("endpoint {endpoint} cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, UserSourceError> {
    let decoded: UsersPageDto = serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid users JSON payload: {error}"))
    })?;
    debug!(total = ?decoded.total, returned = decoded.users.len(), "users page decoded");
    decoded
        .into_domain_users()
        .map_err(UserSourceError::decode)
}

fn parse_user(body: &[u8]) -> Result<UserRecord, UserSourceError> {
    serde_json::from_slice(body)
        .map_err(|error| UserSourceError::decode(format!("invalid user JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::timeout(error.to_string())
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserSourceError::timeout(message)
        }
        _ => UserSourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
