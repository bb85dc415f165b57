// Unit tests for error module
// Tests conversion from access-core errors and exit codes

use crate::error::ConsoleError;

use access_core::error::{ApiError, ConfigError, CoreError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies a rejected request keeps the user-facing text and category.
///
/// **WHY THIS MATTERS**: The exit code and the session-expired hint are chosen
/// from the category; losing it would make scripts misread a 401.
///
/// **BUG THIS CATCHES**: Would catch converting with `to_string()` (the
/// developer text with location) instead of the notification text.
#[test]
fn given_unauthorized_api_error_when_converted_then_rejected_with_exit_code_4() {
    // GIVEN
    let api = ApiError::from_http_status(common::HttpStatusCode::UNAUTHORIZED, "expired");

    // WHEN
    let err = ConsoleError::from(api);

    // THEN
    match &err {
        ConsoleError::Rejected {
            message, category, ..
        } => {
            assert_eq!(message, "Unauthorized, please log in again");
            assert_eq!(*category, "unauthorized");
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn given_business_error_wrapped_in_core_error_when_converted_then_rejected() {
    let core = CoreError::from(ApiError::business("Username already exists", Some(400)));

    let err = ConsoleError::from(core);

    assert!(matches!(err, ConsoleError::Rejected { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("Username already exists"));
}

#[test]
fn given_config_error_when_converted_then_core_variant() {
    let config = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "bad".to_string(),
    };

    let err = ConsoleError::from(config);

    assert!(matches!(err, ConsoleError::Core { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn given_console_error_when_formatted_then_includes_location() {
    let err = ConsoleError::console("Cannot read file");

    let error_string = format!("{}", err);

    assert!(error_string.contains("Console Error"));
    assert!(error_string.contains("Cannot read file"));
    assert!(error_string.contains("error.rs"));
    assert_eq!(err.exit_code(), 2);
}
