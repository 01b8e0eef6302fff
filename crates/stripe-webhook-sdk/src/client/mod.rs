//! Typed API client for authenticated operations.
//!
//! This module provides the [`ApiClient`] for making authenticated calls to
//! the payment platform's REST API. Requests authenticate with a bearer API
//! key; request bodies are form-encoded per the API's convention, responses
//! are JSON.
//!
//! The resource surface is deliberately small: customers as a representative
//! full-CRUD resource, plus read access to events so delivered webhooks can
//! be fetched back for reconciliation.

mod customer;
mod event;

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ConfigError};

pub use customer::{Customer, CreateCustomerRequest, DeletedCustomer, UpdateCustomerRequest};

/// Prefixes a live or restricted API key may carry.
const API_KEY_PREFIXES: [&str; 2] = ["sk_", "rk_"];

/// Validated API key.
///
/// Construction checks for a non-empty value with a recognized prefix; a
/// violation is a fatal configuration error. The key never appears in
/// `Debug` output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap an API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] for an empty string and
    /// [`ConfigError::InvalidApiKeyPrefix`] for a key without an `sk_` or
    /// `rk_` prefix.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if !API_KEY_PREFIXES.iter().any(|p| key.starts_with(p)) {
            return Err(ConfigError::InvalidApiKeyPrefix);
        }
        Ok(Self(key))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

// Security: Don't expose the key in debug output
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<REDACTED>)")
    }
}

/// Configuration for API client behavior.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stripe_webhook_sdk::client::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_api_base("https://api.example.test");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL
    pub api_base: String,
    /// Request timeout duration
    pub timeout: Duration,
    /// User agent string for API requests
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.stripe.com".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: "stripe-webhook-sdk/0.1.0".to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage<T> {
    /// Always `"list"`
    pub object: String,

    /// Items on this page
    pub data: Vec<T>,

    /// Whether more items exist beyond this page
    pub has_more: bool,
}

/// Error envelope the API wraps failures in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticated API client.
///
/// Cheap to clone; the underlying HTTP connection pool is shared between
/// clones.
///
/// # Examples
///
/// ```rust,no_run
/// use stripe_webhook_sdk::client::{ApiClient, ApiKey, CreateCustomerRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ApiKey::new("sk_test_key")?)?;
///
/// let customer = client
///     .create_customer(&CreateCustomerRequest {
///         email: Some("jo@example.com".to_string()),
///         ..Default::default()
///     })
///     .await?;
/// println!("created {}", customer.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    api_key: ApiKey,
}

impl ApiClient {
    /// Create a client with the default configuration.
    pub fn new(api_key: ApiKey) -> Result<Self, ApiError> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientError`] if the HTTP client cannot be
    /// constructed (invalid TLS setup, bad user agent).
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    /// Join a resource path onto the versioned API base.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a resource and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path = %path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(self.api_key.expose())
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST a form-encoded body and decode the JSON response.
    pub(crate) async fn post_form<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<T, ApiError> {
        debug!(path = %path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.api_key.expose())
            .form(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// DELETE a resource and decode the JSON response.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path = %path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(self.api_key.expose())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a response, mapping API error envelopes onto [`ApiError`].
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.error.message)
            .unwrap_or_else(|| status.to_string());

        Err(match status.as_u16() {
            401 => ApiError::AuthenticationFailed,
            404 => ApiError::NotFound,
            429 => ApiError::RateLimitExceeded,
            400 | 402 | 403 => ApiError::InvalidRequest { message },
            code => ApiError::HttpError {
                status: code,
                message,
            },
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
