//! Event resource operations.
//!
//! Events fetched through the API come back as the same [`Event`] type the
//! webhook path produces, so reconciliation code can share handlers with the
//! live intake path.

use crate::client::{ApiClient, ListPage};
use crate::error::ApiError;
use crate::events::Event;

impl ApiClient {
    // ========================================================================
    // Event Operations
    // ========================================================================

    /// Retrieve an event by id.
    pub async fn retrieve_event(&self, event_id: &str) -> Result<Event, ApiError> {
        self.get_json(&format!("events/{event_id}"), &[]).await
    }

    /// List events, newest first, optionally filtered to one event type.
    pub async fn list_events(
        &self,
        event_type: Option<&str>,
        limit: Option<u8>,
    ) -> Result<ListPage<Event>, ApiError> {
        let mut query = Vec::new();
        if let Some(event_type) = event_type {
            query.push(("type", event_type.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json("events", &query).await
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
