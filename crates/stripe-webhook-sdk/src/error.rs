//! Error types for webhook verification, dispatch, and API operations.
//!
//! This module defines all error types used throughout the SDK. Verification
//! failures are ordinary `Err` values that callers recover locally into a
//! 400-class response; nothing on the verify path panics for invalid input.

use thiserror::Error;

/// Signature verification failures.
///
/// Every variant maps to a rejection of the inbound request. None of the
/// `Display` implementations include the secret, the received digest, or the
/// expected digest, so these errors are safe to log and to echo into
/// transport-level error messages.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Signature header is missing required keys or has an unparsable
    /// timestamp (non-retryable without fixing the header).
    #[error("malformed signature header: {message}")]
    MalformedHeader { message: String },

    /// Signature timestamp is older than the freshness window. The sender
    /// may re-sign and resend; a raw HTTP retry of the same request will
    /// keep failing.
    #[error("signature timestamp outside tolerance: age {age}s exceeds {tolerance}s")]
    Expired { age: i64, tolerance: i64 },

    /// Recomputed digest does not match the one in the header. Wrong secret,
    /// tampered payload, or a re-serialized body. Always logged at error
    /// level by the receiver.
    #[error("signature does not match payload")]
    IncorrectSignature,
}

impl VerificationError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }
}

/// Failures while accepting an inbound webhook request.
///
/// These cover the full request state machine around verification: a missing
/// signature header, verification itself, and event-body parsing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Request carried no signature header.
    #[error("missing signature header")]
    MissingSignature,

    /// Signature verification rejected the request.
    #[error("signature verification failed: {0}")]
    Verification(#[from] VerificationError),

    /// Request body is not valid JSON.
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Request body decoded but has no string `type` field. Likely a sender
    /// bug rather than an attack; logged at warn level.
    #[error("webhook payload has no event type")]
    MissingEventType,
}

/// Explicit failure signal returned by an event handler.
///
/// Handlers return this to report a business-level failure; the dispatcher
/// propagates it verbatim to its caller and never converts it into a panic.
#[derive(Debug, Error)]
#[error("handler failed: {reason}")]
pub struct HandlerError {
    /// Human-readable failure reason.
    pub reason: String,
}

impl HandlerError {
    /// Create a handler failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Fatal configuration errors.
///
/// Raised once at construction time, never per request. A process that hits
/// one of these is misconfigured and should not start serving webhooks.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Webhook endpoint secret is empty.
    #[error("webhook secret must not be empty")]
    EmptySecret,

    /// Webhook endpoint secret does not carry the expected prefix.
    #[error("webhook secret must start with 'whsec_'")]
    InvalidSecretPrefix,

    /// API key is empty.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// API key does not carry a recognized prefix.
    #[error("API key must start with 'sk_' or 'rk_'")]
    InvalidApiKeyPrefix,
}

/// Errors during Stripe API operations.
///
/// These errors represent failures when communicating with the API,
/// including HTTP errors, rate limiting, and parsing failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP error response from the API.
    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    /// Rate limit exceeded (HTTP 429). Operations should back off.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// The request was invalid (client error).
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Authentication with the API key failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The requested resource was not found.
    #[error("resource not found")]
    NotFound,

    /// Failed to parse a JSON response from the API.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP client error (network, TLS, timeout).
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl ApiError {
    /// Check if this error represents a transient condition that may succeed
    /// if retried.
    ///
    /// Transient conditions include:
    /// - Server errors (5xx)
    /// - Rate limiting (429)
    /// - Network/transport errors
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpError { status, .. } => *status >= 500,
            Self::RateLimitExceeded => true,
            Self::InvalidRequest { .. } => false,
            Self::AuthenticationFailed => false,
            Self::NotFound => false,
            Self::JsonError(_) => false,
            Self::HttpClientError(_) => true, // Network issues are transient
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
