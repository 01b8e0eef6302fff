//! Webhook event model and dispatch.
//!
//! An [`Event`] is the parsed webhook body: a JSON object with a required
//! `type` field (dot-delimited hierarchical name such as `customer.created`)
//! and a nested data payload. The [`EventRouter`] maps event-type strings to
//! handler units and is built once at startup.

pub mod router;

pub use router::{
    CallbackFn, EventHandler, EventRouter, EventRouterBuilder, HandlerReply, HandlerResult,
    HandlerUnit,
};

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

use crate::error::WebhookError;

/// A parsed webhook event.
///
/// Owned by the dispatch call for the duration of handling; the framework
/// does not retain it afterward. Persistence, if any, is the handler's
/// responsibility.
///
/// The full JSON body is kept as received so handlers can read any field the
/// sender included, with convenience accessors for the common envelope
/// fields (`id`, `created`, `data.object`).
///
/// # Examples
///
/// ```
/// use stripe_webhook_sdk::events::Event;
///
/// let event = Event::from_slice(
///     br#"{"id":"evt_1","type":"invoice.paid","data":{"object":{"amount":1200}}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(event.event_type(), "invoice.paid");
/// assert_eq!(event.id(), Some("evt_1"));
/// ```
#[derive(Debug, Clone)]
pub struct Event {
    event_type: String,
    body: Value,
}

impl Event {
    /// Parse an event from raw webhook body bytes.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidPayload`] — body is not valid JSON
    /// - [`WebhookError::MissingEventType`] — body has no string `type` field
    pub fn from_slice(payload: &[u8]) -> Result<Self, WebhookError> {
        let body: Value = serde_json::from_slice(payload)?;
        Self::from_value(body)
    }

    /// Build an event from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::MissingEventType`] if the value has no string
    /// `type` field.
    pub fn from_value(body: Value) -> Result<Self, WebhookError> {
        let event_type = body
            .get("type")
            .and_then(Value::as_str)
            .ok_or(WebhookError::MissingEventType)?
            .to_string();
        Ok(Self { event_type, body })
    }

    /// The dot-delimited event type, e.g. `customer.created`.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The event id, if the sender included one.
    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(Value::as_str)
    }

    /// The event creation time (Unix seconds), if present.
    pub fn created(&self) -> Option<i64> {
        self.body.get("created").and_then(Value::as_i64)
    }

    /// The nested `data.object` payload, if present.
    pub fn data_object(&self) -> Option<&Value> {
        self.body.get("data").and_then(|data| data.get("object"))
    }

    /// The full event body as received.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the event and return the full body.
    pub fn into_body(self) -> Value {
        self.body
    }
}

// Events fetched back through the API deserialize into the same type the
// webhook path produces.
impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Value::deserialize(deserializer)?;
        Self::from_value(body).map_err(|_| DeError::missing_field("type"))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
