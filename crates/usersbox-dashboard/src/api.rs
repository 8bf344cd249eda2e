//! REST API client for the Usersbox bot backend
//!
//! Provides typed HTTP requests using gloo-net. All routes live under the
//! backend's `/api` prefix.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use url::form_urlencoded;

use crate::config::DashboardConfig;

/// Backend operations the dashboard depends on.
///
/// [`ApiClient`] is the browser implementation; tests drive the dashboard
/// operations through an in-memory fake.
#[async_trait(?Send)]
pub trait BotApi {
    /// `GET /api/stats`
    async fn stats(&self) -> Result<Stats, ApiError>;

    /// `GET /api/users`
    async fn users(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /api/searches`
    async fn searches(&self) -> Result<Vec<SearchRecord>, ApiError>;

    /// `POST /api/search?query=...`
    async fn search(&self, query: &str) -> Result<SearchResult, ApiError>;

    /// `POST /api/give-attempts?user_id=...&attempts=...`
    async fn give_attempts(&self, user_id: i64, attempts: i64)
        -> Result<GrantResponse, ApiError>;
}

/// API client for the bot backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given backend base URL
    /// (without the `/api` suffix)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create an API client from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.backend_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an `/api` route
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL of an `/api` route with a form-encoded query string
    pub fn endpoint_with_query<'a>(
        &self,
        path: &str,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        if query.is_empty() {
            self.endpoint(path)
        } else {
            format!("{}?{}", self.endpoint(path), query)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let resp = Request::get(&url).send().await?;
        read_json(resp).await
    }

    async fn post_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(%url, "POST");
        let resp = Request::post(url).send().await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(ApiError::Http(resp.status()))
    }
}

#[async_trait(?Send)]
impl BotApi for ApiClient {
    async fn stats(&self) -> Result<Stats, ApiError> {
        self.get_json("stats").await
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("users").await
    }

    async fn searches(&self) -> Result<Vec<SearchRecord>, ApiError> {
        self.get_json("searches").await
    }

    async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        let url = self.endpoint_with_query("search", [("query", query)]);
        self.post_json(&url).await
    }

    async fn give_attempts(
        &self,
        user_id: i64,
        attempts: i64,
    ) -> Result<GrantResponse, ApiError> {
        let user_id = user_id.to_string();
        let attempts = attempts.to_string();
        let url = self.endpoint_with_query(
            "give-attempts",
            [("user_id", user_id.as_str()), ("attempts", attempts.as_str())],
        );
        self.post_json(&url).await
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// Aggregate bot statistics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Stats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_searches: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_referrals: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub successful_searches: u64,
    /// Percentage in `0..=100`
    #[serde(deserialize_with = "null_as_default")]
    pub success_rate: f64,
}

/// Bot user as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct User {
    pub telegram_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub attempts_remaining: i64,
    #[serde(default)]
    pub total_referrals: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub referred_by: Option<i64>,
    #[serde(default)]
    pub last_active: Option<String>,
}

impl User {
    /// First and last name joined, or `None` when both are missing
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// One entry of the search log
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchRecord {
    pub user_id: i64,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response of an ad-hoc search
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SearchError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchData>,
}

impl SearchResult {
    /// Placeholder result stored when the search request itself failed
    pub fn failed() -> Self {
        Self {
            error: Some(SearchError::Message("Search failed".to_string())),
            ..Self::default()
        }
    }
}

/// Error reported inside a search response
///
/// The backend sends either a bare string or `{ code, message }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchError {
    Message(String),
    Detail {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    Other(serde_json::Value),
}

impl SearchError {
    /// Human-readable error text
    pub fn message(&self) -> String {
        match self {
            SearchError::Message(message) => message.clone(),
            SearchError::Detail { message: Some(message), .. } => message.clone(),
            SearchError::Detail { code: Some(code), .. } => code.clone(),
            SearchError::Detail { .. } => "Unknown error".to_string(),
            SearchError::Other(value) => value.to_string(),
        }
    }
}

/// Payload of a successful search
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchData {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<SearchItem>,
}

/// Hits from a single source database/collection
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchItem {
    pub source: Option<SearchSource>,
    pub hits: Option<SearchHits>,
}

/// Where a group of hits came from
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchSource {
    pub database: Option<String>,
    pub collection: Option<String>,
}

/// Hit counters; `/search` reports `hitsCount`, `/explain` reports `count`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchHits {
    #[serde(rename = "hitsCount")]
    pub hits_count: Option<u64>,
    pub count: Option<u64>,
}

impl SearchHits {
    pub fn total(&self) -> u64 {
        self.hits_count.or(self.count).unwrap_or(0)
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Confirmation returned by `give-attempts`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GrantResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// Error Types
// ============================================================================

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
}
