//! Tests for the webhook event model.

use super::*;

use serde_json::json;

#[test]
fn test_from_slice_parses_the_envelope() {
    let payload = br#"{
        "id": "evt_1",
        "type": "customer.subscription.updated",
        "created": 1700000000,
        "data": { "object": { "id": "sub_1", "status": "active" } }
    }"#;

    let event = Event::from_slice(payload).unwrap();

    assert_eq!(event.event_type(), "customer.subscription.updated");
    assert_eq!(event.id(), Some("evt_1"));
    assert_eq!(event.created(), Some(1700000000));
    assert_eq!(
        event.data_object().and_then(|o| o.get("status")),
        Some(&json!("active"))
    );
}

#[test]
fn test_envelope_fields_are_optional() {
    // Only `type` is required; everything else tolerates absence
    let event = Event::from_slice(br#"{"type":"ping"}"#).unwrap();

    assert_eq!(event.event_type(), "ping");
    assert_eq!(event.id(), None);
    assert_eq!(event.created(), None);
    assert!(event.data_object().is_none());
}

#[test]
fn test_missing_type_is_rejected() {
    let result = Event::from_slice(br#"{"id":"evt_1","data":{}}"#);

    assert!(matches!(result, Err(WebhookError::MissingEventType)));
}

#[test]
fn test_non_string_type_is_rejected() {
    let result = Event::from_slice(br#"{"type":42}"#);

    assert!(matches!(result, Err(WebhookError::MissingEventType)));
}

#[test]
fn test_invalid_json_is_rejected() {
    let result = Event::from_slice(b"not json at all");

    assert!(matches!(result, Err(WebhookError::InvalidPayload(_))));
}

#[test]
fn test_into_body_returns_the_full_payload() {
    let event = Event::from_value(json!({ "type": "invoice.paid", "extra": true })).unwrap();

    let body = event.into_body();

    assert_eq!(body, json!({ "type": "invoice.paid", "extra": true }));
}

#[test]
fn test_deserialize_matches_from_value() {
    // Events fetched through the API decode into the same type
    let event: Event =
        serde_json::from_str(r#"{"id":"evt_9","type":"invoice.paid","data":{"object":{}}}"#)
            .unwrap();

    assert_eq!(event.event_type(), "invoice.paid");
    assert_eq!(event.id(), Some("evt_9"));
}

#[test]
fn test_deserialize_without_type_fails() {
    let result: Result<Event, _> = serde_json::from_str(r#"{"id":"evt_9"}"#);

    assert!(result.is_err());
}
