//! Tests for webhook signature signing and verification.

use super::*;

fn verifier(secret: &str) -> SignatureVerifier {
    SignatureVerifier::new(WebhookSecret::new(secret).unwrap())
}

// ============================================================================
// Round-trip and determinism
// ============================================================================

#[test]
fn test_sign_verify_round_trip() {
    // Arrange
    let verifier = verifier("whsec_test_secret_key");
    let payload = br#"{"id":"evt_1","type":"customer.created"}"#;
    let now = chrono::Utc::now().timestamp();

    // Act
    let header = verifier.sign(payload, now);
    let result = verifier.verify(payload, &header);

    // Assert
    assert!(result.is_ok(), "fresh signature should verify: {result:?}");
}

#[test]
fn test_sign_is_deterministic() {
    let verifier = verifier("whsec_test_secret_key");
    let payload = b"some payload bytes";

    let first = verifier.sign(payload, 1234567890);
    let second = verifier.sign(payload, 1234567890);

    assert_eq!(first, second, "identical inputs must produce identical headers");
}

#[test]
fn test_empty_payload_round_trip() {
    let verifier = verifier("whsec_test_secret_key");
    let now = chrono::Utc::now().timestamp();

    let header = verifier.sign(b"", now);

    assert!(verifier.verify(b"", &header).is_ok());
}

#[test]
fn test_known_scenario_header_shape() {
    // secret/payload/timestamp fixed; header must be t=<ts>,v1=<64 hex chars>
    // and stable across repeated calls
    let verifier = verifier("whsec_test_secret_key");
    let payload = br#"{"id":"evt_test","type":"customer.created"}"#;

    let header = verifier.sign(payload, 1234567890);

    let digest = header
        .strip_prefix("t=1234567890,v1=")
        .expect("header should start with 't=1234567890,v1='");
    assert_eq!(digest.len(), 64);
    assert!(
        digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "digest must be lowercase hex: {digest}"
    );
    assert_eq!(header, verifier.sign(payload, 1234567890));
}

// ============================================================================
// Tamper and wrong-secret detection
// ============================================================================

#[test]
fn test_tampered_payload_is_rejected() {
    let verifier = verifier("whsec_test_secret_key");
    let original = br#"{"type":"customer.created","amount":100}"#;
    let tampered = br#"{"type":"customer.created","amount":999}"#;
    let now = chrono::Utc::now().timestamp();

    let header = verifier.sign(original, now);

    assert!(matches!(
        verifier.verify(tampered, &header),
        Err(VerificationError::IncorrectSignature)
    ));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let signer = verifier("whsec_correct_secret");
    let receiver = verifier("whsec_other_secret");
    let payload = br#"{"type":"invoice.paid"}"#;
    let now = chrono::Utc::now().timestamp();

    let header = signer.sign(payload, now);

    assert!(matches!(
        receiver.verify(payload, &header),
        Err(VerificationError::IncorrectSignature)
    ));
}

#[test]
fn test_reserialized_payload_is_rejected() {
    // Same JSON value, different byte sequence (whitespace) - signatures
    // cover bytes, not values.
    let verifier = verifier("whsec_test_secret_key");
    let sent = br#"{"type":"invoice.paid","total":5}"#;
    let reencoded = br#"{ "type": "invoice.paid", "total": 5 }"#;
    let now = chrono::Utc::now().timestamp();

    let header = verifier.sign(sent, now);

    assert!(matches!(
        verifier.verify(reencoded, &header),
        Err(VerificationError::IncorrectSignature)
    ));
}

// ============================================================================
// Freshness window
// ============================================================================

#[test]
fn test_signature_exactly_at_tolerance_is_accepted() {
    let verifier = verifier("whsec_test_secret_key");
    let payload = b"payload";
    let signed_at = 1_700_000_000;

    let header = verifier.sign(payload, signed_at);

    // Inclusive boundary: age == 300 still passes
    assert!(verifier.verify_at(payload, &header, signed_at + 300).is_ok());
}

#[test]
fn test_signature_one_second_past_tolerance_is_expired() {
    let verifier = verifier("whsec_test_secret_key");
    let payload = b"payload";
    let signed_at = 1_700_000_000;

    let header = verifier.sign(payload, signed_at);
    let result = verifier.verify_at(payload, &header, signed_at + 301);

    match result {
        Err(VerificationError::Expired { age, tolerance }) => {
            assert_eq!(age, 301);
            assert_eq!(tolerance, 300);
        }
        other => panic!("expected Expired, got {other:?}"),
    }
}

#[test]
fn test_future_timestamp_is_accepted() {
    // Clock skew towards the future is not an expiry condition
    let verifier = verifier("whsec_test_secret_key");
    let payload = b"payload";
    let signed_at = 1_700_000_000;

    let header = verifier.sign(payload, signed_at);

    assert!(verifier.verify_at(payload, &header, signed_at - 60).is_ok());
}

#[test]
fn test_custom_tolerance_is_honored() {
    let verifier =
        verifier("whsec_test_secret_key").with_tolerance(std::time::Duration::from_secs(10));
    let payload = b"payload";
    let signed_at = 1_700_000_000;

    let header = verifier.sign(payload, signed_at);

    assert!(verifier.verify_at(payload, &header, signed_at + 10).is_ok());
    assert!(matches!(
        verifier.verify_at(payload, &header, signed_at + 11),
        Err(VerificationError::Expired { .. })
    ));
}

// ============================================================================
// Malformed headers
// ============================================================================

#[test]
fn test_header_without_v1_is_malformed() {
    let verifier = verifier("whsec_test_secret_key");

    let result = verifier.verify(b"payload", "t=1234567890");

    assert!(matches!(result, Err(VerificationError::MalformedHeader { .. })));
}

#[test]
fn test_header_without_timestamp_is_malformed() {
    let verifier = verifier("whsec_test_secret_key");

    let result = verifier.verify(b"payload", "v1=abcdef0123456789");

    assert!(matches!(result, Err(VerificationError::MalformedHeader { .. })));
}

#[test]
fn test_arbitrary_string_is_malformed() {
    let verifier = verifier("whsec_test_secret_key");

    for header in ["", "garbage", "t,v1", "sha256=abcdef"] {
        let result = verifier.verify(b"payload", header);
        assert!(
            matches!(result, Err(VerificationError::MalformedHeader { .. })),
            "header {header:?} should be malformed, got {result:?}"
        );
    }
}

#[test]
fn test_non_numeric_timestamp_is_malformed() {
    let verifier = verifier("whsec_test_secret_key");

    for header in [
        "t=abc,v1=abcdef0123456789",
        "t= 123,v1=abcdef0123456789",
        "t=123x,v1=abcdef0123456789",
        "t=12.5,v1=abcdef0123456789",
    ] {
        let result = verifier.verify(b"payload", header);
        assert!(
            matches!(result, Err(VerificationError::MalformedHeader { .. })),
            "header {header:?} should be malformed, got {result:?}"
        );
    }
}

#[test]
fn test_duplicate_entries_are_malformed() {
    let verifier = verifier("whsec_test_secret_key");

    let twice_t = verifier.verify(b"payload", "t=1,t=2,v1=abcdef");
    let twice_v1 = verifier.verify(b"payload", "t=1,v1=abcdef,v1=abcdef");

    assert!(matches!(twice_t, Err(VerificationError::MalformedHeader { .. })));
    assert!(matches!(twice_v1, Err(VerificationError::MalformedHeader { .. })));
}

#[test]
fn test_unknown_scheme_entries_are_ignored() {
    let verifier = verifier("whsec_test_secret_key");
    let payload = b"payload";
    let now = chrono::Utc::now().timestamp();

    // Splice a retired-scheme entry into an otherwise valid header
    let header = verifier.sign(payload, now);
    let digest = header.split_once(",v1=").unwrap().1;
    let spliced = format!("t={now},v0=deadbeef,v1={digest}");

    assert!(verifier.verify(payload, &spliced).is_ok());
}

#[test]
fn test_digest_value_may_contain_equals() {
    // Values split on the FIRST '=' only; a stray '=' inside the value is a
    // signature mismatch, not a parse failure
    let verifier = verifier("whsec_test_secret_key");

    let result = verifier.verify(b"payload", "t=1234567890,v1=abc=def");

    assert!(matches!(result, Err(VerificationError::IncorrectSignature)));
}

// ============================================================================
// Secret hygiene
// ============================================================================

#[test]
fn test_debug_output_does_not_expose_secret() {
    let secret = "whsec_super_secret_value";
    let verifier = verifier(secret);

    let debug_output = format!("{verifier:?}");

    assert!(
        !debug_output.contains("super_secret_value"),
        "debug output should not contain the secret"
    );
    assert!(debug_output.contains("REDACTED"));
}
