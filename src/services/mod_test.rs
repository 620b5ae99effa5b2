use serde_json::{Value, json};

use super::*;

#[test]
fn resolve_success_decodes_body() {
    let ids: Vec<i64> = resolve(Envelope::ok(json!([1, 2])), "fallback").unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn resolve_failure_uses_server_message() {
    let err = resolve::<Value>(Envelope::failure(Some("X")), "fallback").unwrap_err();
    assert_eq!(err.to_string(), "X");
    assert!(matches!(err, ServiceError::Rejected(ref message) if message == "X"));
}

#[test]
fn resolve_failure_without_message_uses_fallback() {
    let err = resolve::<Value>(Envelope::failure(None), "fallback").unwrap_err();
    assert_eq!(err.to_string(), "fallback");
}

#[test]
fn resolve_wrong_shape_is_decode_error() {
    let err = resolve::<Vec<i64>>(Envelope::ok(json!({ "not": "a list" })), "fallback").unwrap_err();
    assert!(matches!(err, ServiceError::Decode(_)));
}

#[test]
fn transport_error_displays_transparently() {
    let err = ServiceError::from(TransportError::Request("timed out".into()));
    assert_eq!(err.to_string(), "request failed: timed out");
}
