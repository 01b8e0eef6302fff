//! Webhook endpoint configuration.
//!
//! Configuration is validated once at construction and then passed by value
//! into the verifier and receiver. There is no global configuration state;
//! each webhook endpoint carries its own [`EndpointConfig`].

use std::fmt;
use std::time::Duration;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ConfigError;

/// Required prefix for webhook endpoint secrets.
pub const WEBHOOK_SECRET_PREFIX: &str = "whsec_";

/// Name of the signature header, unless overridden per endpoint.
pub const DEFAULT_SIGNATURE_HEADER: &str = "stripe-signature";

/// Maximum accepted signature age, unless overridden per endpoint.
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(300);

/// Shared secret for one webhook endpoint.
///
/// Construction validates the secret once: it must be non-empty and start
/// with `whsec_`. A violation is a fatal configuration error, not something
/// to surface per request.
///
/// The secret is wiped from memory on drop and never appears in `Debug`
/// output or log fields.
///
/// # Examples
///
/// ```
/// use stripe_webhook_sdk::config::WebhookSecret;
///
/// let secret = WebhookSecret::new("whsec_test_secret_key").unwrap();
/// assert!(WebhookSecret::new("not-a-webhook-secret").is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WebhookSecret(String);

impl WebhookSecret {
    /// Validate and wrap a webhook endpoint secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] for an empty string and
    /// [`ConfigError::InvalidSecretPrefix`] when the `whsec_` prefix is
    /// missing.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if !secret.starts_with(WEBHOOK_SECRET_PREFIX) {
            return Err(ConfigError::InvalidSecretPrefix);
        }
        Ok(Self(secret))
    }

    /// Access the raw secret for HMAC keying.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

// Security: Don't expose the secret in debug output
impl fmt::Debug for WebhookSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebhookSecret(<REDACTED>)")
    }
}

/// Configuration for one webhook endpoint.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stripe_webhook_sdk::config::{EndpointConfig, WebhookSecret};
///
/// let secret = WebhookSecret::new("whsec_test_secret_key").unwrap();
/// let config = EndpointConfig::new(secret)
///     .with_signature_header("x-payment-signature")
///     .with_tolerance(Duration::from_secs(600));
/// ```
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Shared secret the sender signs payloads with
    pub secret: WebhookSecret,
    /// Header carrying the signature (matched case-insensitively)
    pub signature_header: String,
    /// Maximum accepted signature age
    pub tolerance: Duration,
}

impl EndpointConfig {
    /// Create an endpoint configuration with default header and tolerance.
    pub fn new(secret: WebhookSecret) -> Self {
        Self {
            secret,
            signature_header: DEFAULT_SIGNATURE_HEADER.to_string(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the name of the header carrying the signature.
    pub fn with_signature_header(mut self, header: impl Into<String>) -> Self {
        self.signature_header = header.into();
        self
    }

    /// Set the maximum accepted signature age.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
