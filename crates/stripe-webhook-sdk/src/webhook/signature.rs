//! Webhook signature signing and verification.
//!
//! Implements the timestamped HMAC-SHA256 scheme used by the
//! `stripe-signature` header: the signed message is
//! `<timestamp>.<raw payload bytes>` and the header value is
//! `t=<timestamp>,v1=<lowercase hex digest>`. Verification enforces a
//! freshness window against replay and compares digests in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::{EndpointConfig, WebhookSecret, DEFAULT_TOLERANCE};
use crate::error::VerificationError;

type HmacSha256 = Hmac<Sha256>;

/// Key of the timestamp entry in the signature header.
const TIMESTAMP_KEY: &str = "t";

/// Key of the current signature scheme in the signature header.
const SCHEME_KEY: &str = "v1";

/// Timestamp and digest extracted from a signature header.
///
/// Ephemeral; created per request and discarded after verification.
#[derive(Debug)]
struct ParsedHeader {
    timestamp: i64,
    digest: String,
}

/// Signs and verifies webhook payloads for one endpoint.
///
/// `verify` must be given the raw request body exactly as received — any
/// re-serialization (even whitespace-preserving JSON re-encoding) changes the
/// byte sequence the sender signed and the signature no longer matches.
///
/// The verifier is a pure function over its inputs: it holds only the
/// endpoint secret and tolerance, touches no shared state, and may be called
/// concurrently from any number of tasks.
///
/// # Security
///
/// - Uses constant-time comparison to prevent timing attacks
/// - Enforces the freshness window to block replayed requests
/// - Never logs the secret or digest values
///
/// # Examples
///
/// ```
/// use stripe_webhook_sdk::config::WebhookSecret;
/// use stripe_webhook_sdk::webhook::SignatureVerifier;
///
/// let secret = WebhookSecret::new("whsec_test_secret_key").unwrap();
/// let verifier = SignatureVerifier::new(secret);
///
/// let payload = br#"{"id":"evt_1","type":"customer.created"}"#;
/// let now = chrono::Utc::now().timestamp();
/// let header = verifier.sign(payload, now);
///
/// assert!(verifier.verify(payload, &header).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: WebhookSecret,
    tolerance: i64,
}

impl SignatureVerifier {
    /// Create a verifier with the default 300-second tolerance.
    pub fn new(secret: WebhookSecret) -> Self {
        Self {
            secret,
            tolerance: DEFAULT_TOLERANCE.as_secs() as i64,
        }
    }

    /// Create a verifier from an endpoint configuration.
    pub fn from_config(config: &EndpointConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            tolerance: config.tolerance.as_secs() as i64,
        }
    }

    /// Override the freshness window.
    pub fn with_tolerance(mut self, tolerance: std::time::Duration) -> Self {
        self.tolerance = tolerance.as_secs() as i64;
        self
    }

    /// Produce a signature header value for a payload.
    ///
    /// Returns `t=<timestamp>,v1=<hex digest>` where the digest is
    /// HMAC-SHA256 over `<timestamp>.<payload>` keyed by the endpoint
    /// secret. Deterministic: identical inputs always produce identical
    /// output.
    ///
    /// This mirrors what the sender does and is used to construct headers in
    /// tooling and tests.
    pub fn sign(&self, payload: &[u8], timestamp: i64) -> String {
        let digest = self.compute_digest(payload, timestamp);
        format!("{TIMESTAMP_KEY}={timestamp},{SCHEME_KEY}={digest}")
    }

    /// Verify a payload against its signature header.
    ///
    /// Samples the current Unix time once and delegates to [`verify_at`].
    ///
    /// # Errors
    ///
    /// - [`VerificationError::MalformedHeader`] — header does not contain
    ///   exactly one `t` and one `v1` entry, or the timestamp is not a
    ///   strict base-10 integer
    /// - [`VerificationError::Expired`] — signature older than the tolerance
    /// - [`VerificationError::IncorrectSignature`] — digest mismatch
    ///
    /// [`verify_at`]: SignatureVerifier::verify_at
    pub fn verify(&self, payload: &[u8], header: &str) -> Result<(), VerificationError> {
        self.verify_at(payload, header, chrono::Utc::now().timestamp())
    }

    /// Verify a payload against its signature header at a given time.
    ///
    /// `now` is Unix time in seconds. A signature exactly `tolerance`
    /// seconds old is still accepted; one second beyond is rejected.
    pub fn verify_at(
        &self,
        payload: &[u8],
        header: &str,
        now: i64,
    ) -> Result<(), VerificationError> {
        let parsed = parse_header(header)?;

        // Saturating: an absurd attacker-supplied timestamp must not overflow.
        let age = now.saturating_sub(parsed.timestamp);
        if age > self.tolerance {
            return Err(VerificationError::Expired {
                age,
                tolerance: self.tolerance,
            });
        }

        let expected = self.compute_digest(payload, parsed.timestamp);

        // Constant-time comparison; the slice impl handles unequal lengths.
        let matches: bool = expected
            .as_bytes()
            .ct_eq(parsed.digest.as_bytes())
            .into();
        if matches {
            Ok(())
        } else {
            Err(VerificationError::IncorrectSignature)
        }
    }

    /// Compute the lowercase-hex HMAC-SHA256 digest of `<timestamp>.<payload>`.
    fn compute_digest(&self, payload: &[u8], timestamp: i64) -> String {
        // HMAC-SHA256 accepts keys of any length, so keying cannot fail here.
        let mut mac = HmacSha256::new_from_slice(self.secret.expose().as_bytes())
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Parse a signature header into its timestamp and `v1` digest.
///
/// The header is a comma-separated list of `key=value` pairs, split on the
/// first `=` only so digest values containing `=` survive. Exactly one `t`
/// and one `v1` entry are required; entries under other keys (retired
/// schemes) are ignored.
fn parse_header(header: &str) -> Result<ParsedHeader, VerificationError> {
    let mut timestamp: Option<i64> = None;
    let mut digest: Option<String> = None;

    for part in header.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key {
            TIMESTAMP_KEY => {
                // Strict base-10 parse: the entire value must be consumed,
                // no whitespace, no partial parse.
                let parsed = value.parse::<i64>().map_err(|_| {
                    VerificationError::malformed(format!(
                        "timestamp is not a base-10 integer: '{value}'"
                    ))
                })?;
                if timestamp.replace(parsed).is_some() {
                    return Err(VerificationError::malformed("duplicate 't' entry"));
                }
            }
            SCHEME_KEY => {
                if digest.replace(value.to_string()).is_some() {
                    return Err(VerificationError::malformed("duplicate 'v1' entry"));
                }
            }
            _ => {}
        }
    }

    let timestamp =
        timestamp.ok_or_else(|| VerificationError::malformed("missing 't' entry"))?;
    let digest = digest.ok_or_else(|| VerificationError::malformed("missing 'v1' entry"))?;

    Ok(ParsedHeader { timestamp, digest })
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
