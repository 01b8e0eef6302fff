//! Webhook verification and intake.
//!
//! # Core components
//!
//! - [`SignatureVerifier`] - timestamped HMAC-SHA256 signing and verification
//! - [`WebhookReceiver`] - the verify → parse → dispatch → respond state
//!   machine for one endpoint
//! - [`WebhookRequest`]/[`WebhookResponse`] - transport-agnostic request and
//!   response types
//!
//! # Security
//!
//! Verification recomputes HMAC-SHA256 over `<timestamp>.<raw body>` with
//! the endpoint secret and compares digests in constant time. The embedded
//! timestamp must be within the freshness window (300 seconds by default),
//! which bounds how long a captured request can be replayed.
//!
//! The raw body bytes handed to [`WebhookReceiver::receive`] must be exactly
//! what the sender transmitted. Signatures cover the byte sequence, not the
//! JSON value: decoding and re-encoding the body - even without changing any
//! field - produces different bytes and a verification failure.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use bytes::Bytes;
//! use stripe_webhook_sdk::config::{EndpointConfig, WebhookSecret};
//! use stripe_webhook_sdk::events::{Event, EventRouter, HandlerReply, HandlerResult};
//! use stripe_webhook_sdk::webhook::{SignatureVerifier, WebhookReceiver, WebhookRequest};
//!
//! fn on_invoice_paid(event: Event) -> HandlerResult {
//!     println!("invoice paid: {:?}", event.id());
//!     Ok(HandlerReply::Ack)
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let secret = WebhookSecret::new("whsec_test_secret_key").unwrap();
//! let config = EndpointConfig::new(secret);
//! let router = EventRouter::builder().on("invoice.paid", on_invoice_paid).build();
//!
//! let verifier = SignatureVerifier::from_config(&config);
//! let receiver = WebhookReceiver::new(config, router);
//!
//! // A request signed the way the sender signs it:
//! let body = br#"{"id":"evt_1","type":"invoice.paid","data":{"object":{}}}"#;
//! let header = verifier.sign(body, chrono::Utc::now().timestamp());
//! let headers = HashMap::from([("stripe-signature".to_string(), header)]);
//!
//! let response = receiver
//!     .receive(WebhookRequest::new(headers, Bytes::from_static(body)))
//!     .await;
//! assert_eq!(response.status_code(), 200);
//! # }
//! ```

pub mod receiver;
pub mod signature;

// Re-export main types
pub use receiver::{WebhookReceiver, WebhookRequest, WebhookResponse};
pub use signature::SignatureVerifier;
