//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use hexadmin_core::ConsoleConfig;
use reqwest::{Client, ClientBuilder, header};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("hexadmin-client/", env!("CARGO_PKG_VERSION"));
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for endpoints that don't require a session
#[derive(Clone)]
pub struct PublicAdminClient {
    client: Client,
    base_url: String,
    api_path: String,
}

/// Client carrying a session token
#[derive(Clone)]
pub struct AuthenticatedAdminClient {
    client: Client,
    base_url: String,
    api_path: String,
    token: String,
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Request returned error status");
        Err(ClientError::from_status(status, &body))
    }
}

impl PublicAdminClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-account segment used by the product endpoints
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "Sending request");
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a session token to get an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedAdminClient {
        AuthenticatedAdminClient {
            client: self.client,
            base_url: self.base_url,
            api_path: self.api_path,
            token: token.into(),
        }
    }

    /// Authenticated view sharing this client's connection pool
    pub fn with_token(&self, token: impl Into<String>) -> AuthenticatedAdminClient {
        self.clone().authenticate(token)
    }
}

impl AuthenticatedAdminClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Create a request builder with the session token.
    ///
    /// The API expects the bare token in `Authorization`, without a scheme.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "Sending authenticated request");
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, self.token.as_str())
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

/// Builder for the typed clients
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    api_path: Option<String>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the console settings
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new()
            .base_url(config.api_base_url.clone())
            .api_path(config.api_path.clone())
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-account API path segment
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = Some(path.into());
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicAdminClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }
        let api_path = self
            .api_path
            .unwrap_or_default()
            .trim_matches('/')
            .to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        // Browsers own the user agent and fetch has no timeout
        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().build()?;

        Ok(PublicAdminClient {
            client,
            base_url,
            api_path,
        })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedAdminClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}
