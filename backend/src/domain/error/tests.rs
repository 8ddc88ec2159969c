//! Tests for the error payload contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn missing_fields_error() -> Error {
    Error::invalid_request("Missing required fields: name, email")
        .with_details(json!({ "fields": ["name", "email"] }))
}

#[rstest]
fn serialises_message_under_error_key(missing_fields_error: Error) {
    let value = serde_json::to_value(&missing_fields_error).expect("serialise error");
    assert_eq!(
        value.get("error").and_then(Value::as_str),
        Some("Missing required fields: name, email")
    );
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert!(value.get("message").is_none());
    assert!(value.get("traceId").is_none());
}

#[rstest]
fn round_trips_through_json(missing_fields_error: Error) {
    let with_trace = missing_fields_error.with_trace_id(TRACE_ID);
    let encoded = serde_json::to_string(&with_trace).expect("serialise error");
    let decoded: Error = serde_json::from_str(&encoded).expect("deserialise error");
    assert_eq!(decoded, with_trace);
    assert_eq!(decoded.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_messages_are_rejected(#[case] message: &str) {
    assert_eq!(
        Error::try_new(ErrorCode::NotFound, message),
        Err(ErrorValidationError::EmptyMessage)
    );
}

#[test]
fn deserialising_blank_message_fails() {
    let result = serde_json::from_value::<Error>(json!({ "error": " ", "code": "not_found" }));
    assert!(result.is_err());
}

#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let err = TraceId::scope(trace_id, async { Error::unauthorized("Invalid credentials") }).await;
    assert_eq!(err.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[case(Error::invalid_request("x"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("x"), ErrorCode::Unauthorized)]
#[case(Error::not_found("x"), ErrorCode::NotFound)]
#[case(Error::internal("x"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}
