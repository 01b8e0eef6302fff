//! Event routing: an immutable mapping from event type to handler unit.
//!
//! The router is built once per webhook endpoint and is read-only afterward,
//! so concurrent dispatch calls read it without synchronization. A handler
//! unit is either a plain callback function or a named component exposing a
//! single async `handle` entry point.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::HandlerError;
use crate::events::Event;

/// Success signal returned by a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerReply {
    /// Bare acknowledgement: the event was handled (or deliberately ignored).
    Ack,

    /// Acknowledgement carrying an auxiliary value for the caller.
    Value(serde_json::Value),
}

/// What a handler returns: an acknowledgement or an explicit failure signal.
///
/// Handler panics are not caught anywhere in dispatch; they propagate to the
/// caller, which applies its own top-level policy.
pub type HandlerResult = Result<HandlerReply, HandlerError>;

/// Plain-function handler variant.
pub type CallbackFn = fn(Event) -> HandlerResult;

/// A named component that handles events of one registered type.
///
/// The async counterpart to [`CallbackFn`] for handlers that own state or
/// perform I/O. Implementations must be `Send + Sync`; the router invokes
/// them concurrently across requests.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use stripe_webhook_sdk::events::{Event, EventHandler, HandlerReply, HandlerResult};
///
/// struct InvoiceLedger;
///
/// #[async_trait]
/// impl EventHandler for InvoiceLedger {
///     async fn handle(&self, event: Event) -> HandlerResult {
///         // record the invoice somewhere durable
///         let _ = event.data_object();
///         Ok(HandlerReply::Ack)
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle one event and report the outcome.
    async fn handle(&self, event: Event) -> HandlerResult;
}

/// One registered handler: a callback function or a named component.
#[derive(Clone)]
pub enum HandlerUnit {
    /// Single-argument callable.
    Callback(CallbackFn),

    /// Component exposing a `handle` entry point.
    Component(Arc<dyn EventHandler>),
}

impl fmt::Debug for HandlerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("HandlerUnit::Callback"),
            Self::Component(_) => f.write_str("HandlerUnit::Component"),
        }
    }
}

/// Immutable event-type → handler table for one webhook endpoint.
///
/// Built once via [`EventRouterBuilder`] at setup time and never mutated
/// afterward; it lives for the process lifetime attached to its endpoint.
/// Unmatched event types are not an error — senders deliver many types a
/// given installation does not care about, and those are acknowledged
/// without invoking any handler.
///
/// # Examples
///
/// ```
/// use stripe_webhook_sdk::events::{Event, EventRouter, HandlerReply};
///
/// fn on_customer_created(event: Event) -> stripe_webhook_sdk::events::HandlerResult {
///     println!("new customer: {:?}", event.id());
///     Ok(HandlerReply::Ack)
/// }
///
/// let router = EventRouter::builder()
///     .on("customer.created", on_customer_created)
///     .build();
///
/// assert!(router.is_registered("customer.created"));
/// assert!(!router.is_registered("invoice.paid"));
/// ```
#[derive(Debug)]
pub struct EventRouter {
    routes: HashMap<String, HandlerUnit>,
}

impl EventRouter {
    /// Start building a router.
    pub fn builder() -> EventRouterBuilder {
        EventRouterBuilder::new()
    }

    /// Number of registered event types.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Whether a handler is registered for the given event type.
    pub fn is_registered(&self, event_type: &str) -> bool {
        self.routes.contains_key(event_type)
    }

    /// Dispatch an event to its registered handler.
    ///
    /// Looks up the event's `type` field. If a handler is registered, it is
    /// invoked with the event and its result is returned exactly as the
    /// handler produced it. If no handler is registered, the event is
    /// acknowledged with [`HandlerReply::Ack`] without invoking anything.
    ///
    /// Explicit handler failures come back as `Err(HandlerError)`; handler
    /// panics are not caught and unwind into the caller.
    pub async fn dispatch(&self, event: Event) -> HandlerResult {
        match self.routes.get(event.event_type()) {
            Some(HandlerUnit::Callback(callback)) => callback(event),
            Some(HandlerUnit::Component(component)) => component.handle(event).await,
            None => {
                debug!(
                    event_type = %event.event_type(),
                    "no handler registered, acknowledging"
                );
                Ok(HandlerReply::Ack)
            }
        }
    }
}

/// Builder for [`EventRouter`].
///
/// Registrations are collected at init time; `build` freezes them into the
/// immutable table. Registering the same event type twice keeps the last
/// registration and logs a warning.
#[derive(Debug, Default)]
pub struct EventRouterBuilder {
    routes: HashMap<String, HandlerUnit>,
}

impl EventRouterBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback function for an event type.
    pub fn on(self, event_type: impl Into<String>, callback: CallbackFn) -> Self {
        self.register(event_type, HandlerUnit::Callback(callback))
    }

    /// Register a component handler for an event type.
    pub fn component(
        self,
        event_type: impl Into<String>,
        handler: Arc<dyn EventHandler>,
    ) -> Self {
        self.register(event_type, HandlerUnit::Component(handler))
    }

    /// Register a handler unit for an event type. Last registration wins.
    pub fn register(mut self, event_type: impl Into<String>, unit: HandlerUnit) -> Self {
        let event_type = event_type.into();
        if self.routes.insert(event_type.clone(), unit).is_some() {
            warn!(
                event_type = %event_type,
                "replacing existing handler registration"
            );
        }
        self
    }

    /// Freeze the registrations into an immutable router.
    pub fn build(self) -> EventRouter {
        EventRouter {
            routes: self.routes,
        }
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
