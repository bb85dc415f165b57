use crate::error::ApiError;
use crate::error::api::{
    BUSINESS_FALLBACK_MESSAGE, FORBIDDEN_MESSAGE, NETWORK_ERROR_MESSAGE, NO_RESPONSE_MESSAGE,
    NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE, UNAUTHORIZED_MESSAGE,
};
use crate::transport::{RawResponse, ResponseEnvelope, classify};

use serde_json::json;

fn ok(body: &str) -> Result<RawResponse, ApiError> {
    Ok(RawResponse::new(200, body))
}

/// **VALUE**: Verifies the success path hands back only the `data` field.
///
/// **BUG THIS CATCHES**: Would catch returning the whole envelope to callers.
#[test]
fn given_code_200_envelope_when_classified_then_data_is_returned() {
    // GIVEN: A successful envelope
    let body = r#"{"code":200,"msg":"ok","data":{"total":3}}"#;

    // WHEN
    let result = classify(ok(body));

    // THEN
    assert_eq!(result.unwrap(), json!({ "total": 3 }));
}

#[test]
fn given_code_200_without_data_when_classified_then_null_is_returned() {
    let result = classify(ok(r#"{"code":200,"msg":"deleted"}"#));

    assert_eq!(result.unwrap(), serde_json::Value::Null);
}

/// **VALUE**: Verifies transport success and business success are separate axes.
///
/// **WHY THIS MATTERS**: The backend answers HTTP 200 for most business
/// failures; treating those as success would show empty screens silently.
#[test]
fn given_http_200_with_business_failure_when_classified_then_business_error_with_msg() {
    // GIVEN: HTTP 200, envelope code 400
    let body = r#"{"code":400,"msg":"Username already exists","data":null}"#;

    // WHEN
    let err = classify(ok(body)).unwrap_err();

    // THEN
    match err {
        ApiError::Business { message, code, .. } => {
            assert_eq!(message, "Username already exists");
            assert_eq!(code, Some(400));
        }
        other => panic!("Expected Business, got {other:?}"),
    }
}

#[test]
fn given_business_failure_with_only_message_field_when_classified_then_message_is_used() {
    let err = classify(ok(r#"{"code":500,"message":"disk full"}"#)).unwrap_err();

    assert_eq!(err.user_message(), "disk full");
}

#[test]
fn given_both_msg_and_message_when_classified_then_msg_wins() {
    let err = classify(ok(r#"{"code":1,"msg":"first","message":"second"}"#)).unwrap_err();

    assert_eq!(err.user_message(), "first");
}

#[test]
fn given_empty_msg_when_classified_then_message_is_used() {
    let err = classify(ok(r#"{"code":1,"msg":"","message":"second"}"#)).unwrap_err();

    assert_eq!(err.user_message(), "second");
}

#[test]
fn given_business_failure_without_text_when_classified_then_fallback_message() {
    let err = classify(ok(r#"{"code":403}"#)).unwrap_err();

    assert_eq!(err.user_message(), BUSINESS_FALLBACK_MESSAGE);
}

/// **BUG THIS CATCHES**: Would catch a loose comparison that accepts `"200"`.
#[test]
fn given_string_code_200_when_classified_then_business_failure() {
    let err = classify(ok(r#"{"code":"200","data":{}}"#)).unwrap_err();

    assert!(matches!(err, ApiError::Business { code: None, .. }));
}

#[test]
fn given_float_code_200_when_classified_then_success() {
    let result = classify(ok(r#"{"code":200.0,"data":1}"#));

    assert_eq!(result.unwrap(), json!(1));
}

#[test]
fn given_non_json_body_when_classified_then_business_failure_with_fallback() {
    let err = classify(ok("<html>gateway</html>")).unwrap_err();

    assert!(matches!(err, ApiError::Business { .. }));
    assert_eq!(err.user_message(), BUSINESS_FALLBACK_MESSAGE);
}

/// **VALUE**: Verifies each special status gets its fixed user message.
///
/// **BUG THIS CATCHES**: Would catch a status falling through to the generic
/// branch, or the server's own text leaking into the fixed messages.
#[test]
fn given_error_statuses_when_classified_then_fixed_messages_per_status() {
    let cases = [
        (401, UNAUTHORIZED_MESSAGE, "unauthorized"),
        (403, FORBIDDEN_MESSAGE, "forbidden"),
        (404, NOT_FOUND_MESSAGE, "not_found"),
        (500, SERVER_ERROR_MESSAGE, "server_error"),
        (502, NETWORK_ERROR_MESSAGE, "http_status"),
        (418, NETWORK_ERROR_MESSAGE, "http_status"),
    ];

    for (status, expected_message, expected_category) in cases {
        // GIVEN: A response with a server-provided message
        let outcome = Ok(RawResponse::new(status, r#"{"code":1,"msg":"server says no"}"#));

        // WHEN
        let err = classify(outcome).unwrap_err();

        // THEN
        assert_eq!(err.user_message(), expected_message, "status {status}");
        assert_eq!(err.category(), expected_category, "status {status}");
        assert_eq!(err.status_code(), Some(status));
    }
}

#[test]
fn given_401_with_server_text_when_classified_then_text_kept_as_detail() {
    let err = classify(Ok(RawResponse::new(401, r#"{"msg":"token expired"}"#))).unwrap_err();

    match err {
        ApiError::Unauthorized { ref detail, .. } => assert_eq!(detail, "token expired"),
        ref other => panic!("Expected Unauthorized, got {other:?}"),
    }
    assert!(err.is_unauthorized());
}

#[test]
fn given_no_response_when_classified_then_network_connection_failed() {
    let err = classify(Err(ApiError::no_response("connection refused"))).unwrap_err();

    assert!(matches!(err, ApiError::NoResponse { .. }));
    assert_eq!(err.user_message(), NO_RESPONSE_MESSAGE);
    assert_eq!(err.status_code(), None);
}

#[test]
fn given_array_body_when_parsed_then_envelope_is_empty() {
    let envelope = ResponseEnvelope::parse("[1,2,3]");

    assert_eq!(envelope, ResponseEnvelope::default());
    assert!(!envelope.is_success());
}

#[test]
fn given_non_string_msg_when_parsed_then_it_is_ignored() {
    let envelope = ResponseEnvelope::parse(r#"{"code":1,"msg":42,"message":"text"}"#);

    assert_eq!(envelope.msg, None);
    assert_eq!(envelope.error_text(), Some("text"));
}
