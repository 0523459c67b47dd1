//! HTTP API client for the FreshMart backend.
//!
//! Provides a small, ergonomic wrapper over `reqwest` with automatic JSON
//! handling, query parameters, and bearer-credential attachment. Every
//! call resolves to a tagged `Result<T, ApiError>`; callers never see a
//! raw transport error and nothing here panics.
//!
//! # Example
//!
//! ```rust,ignore
//! use fresh_data::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::from_env());
//! client.set_token(Some("jwt...".to_string()));
//!
//! let products: Vec<Product> = client
//!     .get("/products")
//!     .query(vec![("category".into(), "fruits".into())])
//!     .send_json()
//!     .await?;
//! ```

mod error;
pub mod endpoints;

pub use error::{ApiError, GENERIC_FAILURE};

use error::ErrorBody;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::RwLock;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "FRESHMART_API_URL";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL prepended to every request path.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `FRESHMART_API_URL`, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// HTTP client for the FreshMart REST API.
///
/// Holds the current session credential; once set, it is attached as a
/// bearer token to every outgoing request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        }
    }

    /// Set or clear the session credential.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    /// Whether a credential is currently attached.
    pub fn has_token(&self) -> bool {
        self.token.read().map(|t| t.is_some()).unwrap_or(false)
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a GET request.
    pub fn get(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    /// Create a PATCH request.
    pub fn patch(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PATCH, path)
    }

    /// Create a DELETE request.
    pub fn delete(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        ApiRequest {
            client: self,
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// A request being built against an [`ApiClient`].
pub struct ApiRequest<'c> {
    client: &'c ApiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl ApiRequest<'_> {
    /// Add query-string parameters.
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        self.body =
            Some(serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    /// Send the request, discarding any response body.
    pub async fn send(self) -> Result<(), ApiError> {
        self.dispatch().await?;
        Ok(())
    }

    /// Send the request and deserialize the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.dispatch().await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute the request and normalize the outcome.
    ///
    /// Returns the raw response only for 2xx statuses; any other status is
    /// turned into an [`ApiError`] carrying the server's message.
    async fn dispatch(self) -> Result<reqwest::Response, ApiError> {
        let url = self.client.full_url(&self.path);
        let mut request = self.client.http.request(self.method.clone(), &url);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if let Some(token) = self.client.current_token() {
            request = request.bearer_auth(token);
        }
        if let Some(ref body) = self.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %self.method, path = %self.path, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(method = %self.method, path = %self.path, status = status.as_u16(), "request ok");
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);

        tracing::debug!(
            method = %self.method,
            path = %self.path,
            status = status.as_u16(),
            "request rejected"
        );
        Err(ApiError::from_status(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:5000/api/"));
        assert_eq!(
            client.full_url("/products"),
            "http://localhost:5000/api/products"
        );
    }

    #[test]
    fn test_token_attachment_state() {
        let client = ApiClient::new(ClientConfig::new(DEFAULT_BASE_URL));
        assert!(!client.has_token());
        client.set_token(Some("jwt".to_string()));
        assert!(client.has_token());
        client.set_token(None);
        assert!(!client.has_token());
    }
}
