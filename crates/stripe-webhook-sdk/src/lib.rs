//! # Stripe Webhook SDK
//!
//! Client SDK and webhook-receiver toolkit for a Stripe-style payment
//! platform HTTP API.
//!
//! This SDK provides:
//! - Webhook signature verification (timestamped HMAC-SHA256 with a
//!   freshness window and constant-time comparison)
//! - Event dispatch from event-type strings to registered handlers
//! - A transport-agnostic webhook receiver mapping rejections onto
//!   400-class responses
//! - A typed API client with bearer authentication
//!
//! # Examples
//!
//! ## Verifying and dispatching a webhook
//!
//! ```
//! use stripe_webhook_sdk::config::{EndpointConfig, WebhookSecret};
//! use stripe_webhook_sdk::events::{Event, EventRouter, HandlerReply, HandlerResult};
//! use stripe_webhook_sdk::webhook::WebhookReceiver;
//!
//! fn on_customer_created(event: Event) -> HandlerResult {
//!     println!("customer created: {:?}", event.id());
//!     Ok(HandlerReply::Ack)
//! }
//!
//! let secret = WebhookSecret::new("whsec_test_secret_key").unwrap();
//! let router = EventRouter::builder()
//!     .on("customer.created", on_customer_created)
//!     .build();
//! let receiver = WebhookReceiver::new(EndpointConfig::new(secret), router);
//! // hand `receiver` to your HTTP layer; see the `webhook` module docs
//! ```
//!
//! ## Calling the API
//!
//! ```rust,no_run
//! use stripe_webhook_sdk::client::{ApiClient, ApiKey};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ApiKey::new("sk_test_key")?)?;
//! let customer = client.retrieve_customer("cus_123").await?;
//! println!("{:?}", customer.email);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod webhook;

// Re-export commonly used types at crate root for convenience
pub use error::{ApiError, ConfigError, HandlerError, VerificationError, WebhookError};

pub use config::{EndpointConfig, WebhookSecret};
pub use events::{Event, EventHandler, EventRouter, HandlerReply, HandlerResult, HandlerUnit};
pub use webhook::{SignatureVerifier, WebhookReceiver, WebhookRequest, WebhookResponse};
