//! API Client Module
//!
//! HTTP communication with the Matchday backend.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::session::SessionHandle;

/// HTTP method for a wrapped request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// Per-call request description
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub url: String,
    pub method: Method,
    pub data: Option<Value>,
    pub params: Vec<(String, String)>,
    /// Overrides the session token when non-empty
    pub token: Option<String>,
}

impl RequestConfig {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn post(url: &str, data: Value) -> Self {
        Self {
            url: url.to_string(),
            method: Method::Post,
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

/// API client for the Matchday backend
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Issue a wrapped request.
    ///
    /// The `Authorization` header carries the per-call token override when
    /// non-empty, else the session token, verbatim. Failures come back as
    /// typed errors with any error payload preserved.
    pub async fn request<T: DeserializeOwned>(
        &self,
        session: &SessionHandle,
        config: RequestConfig,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, config.url);

        let token = config
            .token
            .filter(|token| !token.is_empty())
            .unwrap_or_else(|| session.token());

        debug!("{} {}", config.method, url);

        let builder = match config.method {
            Method::Get => self.client.get(&url),
            Method::Post => self
                .client
                .post(&url)
                .json(&config.data.unwrap_or_else(|| json!({}))),
        };

        let response = builder
            .header("Authorization", token)
            .query(&config.params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Log in with platform credentials
    pub async fn login(
        &self,
        session: &SessionHandle,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let data = serde_json::to_value(credentials)
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let response: LoginResponse = self
            .request(session, RequestConfig::post("/auth/login", data))
            .await?;

        info!("Logged in");
        Ok(response)
    }

    /// Fetch the signed-in user's profile
    pub async fn fetch_profile(&self, session: &SessionHandle) -> Result<UserProfile, ApiError> {
        self.request(session, RequestConfig::get("/user/profile"))
            .await
    }

    /// List matches
    pub async fn list_matches(
        &self,
        session: &SessionHandle,
    ) -> Result<Vec<MatchSummary>, ApiError> {
        self.request(session, RequestConfig::get("/match")).await
    }

    /// Fetch a single match
    pub async fn fetch_match(
        &self,
        session: &SessionHandle,
        id: &str,
    ) -> Result<MatchDetail, ApiError> {
        self.request(session, RequestConfig::get(&format!("/match/{}", id)))
            .await
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchDetail {
    pub id: String,
    pub title: String,
    pub status: String,
    pub description: Option<String>,
}

/// API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server returned status {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("Decode error: {0}")]
    Decode(String),
}
