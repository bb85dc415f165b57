use access_core::error::{ApiError, ConfigError, CoreError};

use common::HttpStatusCode;

/// **VALUE**: Verifies that pipeline errors carry the location they were created at.
///
/// **WHY THIS MATTERS**: A rejected request surfaces far from where it was
/// classified; the location tells developers which stage produced it.
///
/// **BUG THIS CATCHES**: Would catch removing `#[track_caller]` from the
/// constructors, which would make every error point into error/api.rs.
#[test]
fn given_business_error_when_formatted_then_includes_caller_location() {
    // GIVEN
    let err = ApiError::business("Username already exists", Some(400));

    // WHEN
    let error_string = format!("{}", err);

    // THEN
    assert!(error_string.contains("Business Error"));
    assert!(error_string.contains("Username already exists"));
    assert!(error_string.contains("error.rs"));
}

#[test]
fn given_http_status_error_when_formatted_then_includes_status_and_detail() {
    let err = ApiError::from_http_status(HttpStatusCode(502), "bad gateway");

    let error_string = err.to_string();

    assert!(error_string.contains("HTTP 502"));
    assert!(error_string.contains("bad gateway"));
    assert!(error_string.contains("error.rs"));
}

#[test]
fn given_api_error_when_wrapped_in_core_error_then_message_preserved() {
    let err: CoreError = ApiError::no_response("refused").into();

    assert!(matches!(err, CoreError::Api(ApiError::NoResponse { .. })));
    assert!(err.to_string().contains("refused"));
}

#[test]
fn given_config_validation_error_when_wrapped_then_converts_via_from() {
    let mut config = access_core::config::ClientConfig::default();
    config.api.base_url = "::".to_string();

    let err: CoreError = config.validate().unwrap_err().into();

    assert!(matches!(err, CoreError::Config(ConfigError::ValidationError { .. })));
}
