//! Webhook receiver: the per-request state machine from raw HTTP data to a
//! transport-level response.
//!
//! One inbound request moves through:
//!
//! ```text
//! RECEIVED -> [signature header present?] --no--> 400 "no signature"
//!          --yes--> [verify] --fail--> 400 "invalid signature"
//!                          --ok--> [body has "type"?] --no--> 400 "missing event type"
//!                                                    --yes--> dispatch --> 200 (empty body)
//! ```
//!
//! The receiver always answers 200 once the signature verified and the event
//! parsed, regardless of the handler's outcome; handler failures are logged
//! and business-level recovery happens out of band. Handler panics are not
//! caught and unwind into the embedding server's panic policy. Retry on
//! non-2xx is the sender's responsibility.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::{debug, error, info, warn};

use crate::config::EndpointConfig;
use crate::error::{VerificationError, WebhookError};
use crate::events::{Event, EventRouter, HandlerReply};
use crate::webhook::signature::SignatureVerifier;

/// Response body for a request with no signature header.
pub const BODY_NO_SIGNATURE: &str = "no signature";

/// Response body for a request whose signature failed verification.
pub const BODY_INVALID_SIGNATURE: &str = "invalid signature";

/// Response body for a request whose body has no event type.
pub const BODY_MISSING_EVENT_TYPE: &str = "missing event type";

/// Raw HTTP webhook request data.
///
/// The body must be the exact raw bytes of the request as received — the
/// embedding HTTP layer is responsible for capturing them before any JSON
/// decoding, reassembled in receipt order if the transfer was chunked.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use bytes::Bytes;
/// use stripe_webhook_sdk::webhook::WebhookRequest;
///
/// let headers = HashMap::from([(
///     "stripe-signature".to_string(),
///     "t=1234567890,v1=abc".to_string(),
/// )]);
/// let request = WebhookRequest::new(headers, Bytes::from_static(b"{}"));
/// assert!(request.header("Stripe-Signature").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    headers: HashMap<String, String>,
    body: Bytes,
}

impl WebhookRequest {
    /// Create a webhook request from headers and the raw body.
    pub fn new(headers: HashMap<String, String>, body: Bytes) -> Self {
        Self { headers, body }
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The raw payload bytes, untouched.
    pub fn payload(&self) -> &[u8] {
        &self.body
    }
}

/// HTTP response for a webhook request.
///
/// Senders see only coarse outcomes and short textual reasons; no internal
/// detail (secret values, digests, stack traces) ever appears in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookResponse {
    /// 200 OK with an empty body - webhook accepted.
    Ok,

    /// 400 Bad Request with a short reason.
    BadRequest { message: &'static str },
}

impl WebhookResponse {
    /// Get the HTTP status code for this response.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest { .. } => 400,
        }
    }

    /// Get the response body.
    pub fn body(&self) -> &'static str {
        match self {
            Self::Ok => "",
            Self::BadRequest { message } => message,
        }
    }

    /// Check if the response indicates acceptance.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Processes inbound webhook requests for one endpoint.
///
/// Couples the signature verifier with the event router. Holds no mutable
/// state: concurrent `receive` calls share the verifier and the read-only
/// routing table without locking.
///
/// # Transport integration
///
/// The receiver is transport-agnostic; an axum handler wires it up like
/// this, using the framework's raw-body extraction so the verified bytes are
/// exactly what the sender signed:
///
/// ```rust,ignore
/// async fn stripe_webhook(
///     State(receiver): State<Arc<WebhookReceiver>>,
///     headers: HeaderMap,
///     body: Bytes,
/// ) -> impl IntoResponse {
///     let headers = headers
///         .iter()
///         .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
///         .collect();
///     let response = receiver.receive(WebhookRequest::new(headers, body)).await;
///     (
///         StatusCode::from_u16(response.status_code()).unwrap(),
///         response.body().to_string(),
///     )
/// }
/// ```
#[derive(Debug)]
pub struct WebhookReceiver {
    config: EndpointConfig,
    verifier: SignatureVerifier,
    router: EventRouter,
}

impl WebhookReceiver {
    /// Create a receiver for one endpoint.
    ///
    /// The verifier inherits the endpoint's secret and tolerance; the router
    /// must already be fully built.
    pub fn new(config: EndpointConfig, router: EventRouter) -> Self {
        let verifier = SignatureVerifier::from_config(&config);
        Self {
            config,
            verifier,
            router,
        }
    }

    /// Process one inbound webhook request.
    ///
    /// Runs the verify → parse → dispatch → respond state machine. Returns
    /// 400 with a short reason for any rejection, 200 with an empty body
    /// otherwise. Handler failures do not change the response; they are
    /// logged at error level and recoverable by calling
    /// [`EventRouter::dispatch`] directly where the result matters.
    pub async fn receive(&self, request: WebhookRequest) -> WebhookResponse {
        let Some(signature) = request.header(&self.config.signature_header) else {
            warn!(
                header = %self.config.signature_header,
                "webhook request without signature header"
            );
            return reject(&WebhookError::MissingSignature);
        };

        if let Err(e) = self.verifier.verify(request.payload(), signature) {
            match &e {
                // Digest mismatch is a security event: wrong secret,
                // tampered payload, or a re-serialized body.
                VerificationError::IncorrectSignature => {
                    error!(error = %e, "webhook signature rejected");
                }
                VerificationError::MalformedHeader { .. } | VerificationError::Expired { .. } => {
                    warn!(error = %e, "webhook signature rejected");
                }
            }
            return reject(&WebhookError::Verification(e));
        }

        let event = match Event::from_slice(request.payload()) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "webhook body has no usable event type");
                return reject(&e);
            }
        };

        let event_type = event.event_type().to_string();
        let event_id = event.id().map(str::to_string);
        info!(
            event_type = %event_type,
            event_id = ?event_id,
            "webhook verified"
        );

        match self.router.dispatch(event).await {
            Ok(HandlerReply::Ack) => {
                debug!(event_type = %event_type, "event handled");
            }
            Ok(HandlerReply::Value(_)) => {
                debug!(event_type = %event_type, "event handled with value");
            }
            Err(e) => {
                error!(
                    event_type = %event_type,
                    event_id = ?event_id,
                    error = %e,
                    "handler reported failure"
                );
            }
        }

        WebhookResponse::Ok
    }
}

/// Map a rejection onto its 400-class response.
fn reject(error: &WebhookError) -> WebhookResponse {
    let message = match error {
        WebhookError::MissingSignature => BODY_NO_SIGNATURE,
        WebhookError::Verification(_) => BODY_INVALID_SIGNATURE,
        WebhookError::InvalidPayload(_) | WebhookError::MissingEventType => {
            BODY_MISSING_EVENT_TYPE
        }
    };
    WebhookResponse::BadRequest { message }
}

#[cfg(test)]
#[path = "receiver_tests.rs"]
mod tests;
