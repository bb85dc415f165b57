use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the exact call site.
///
/// **WHY THIS MATTERS**: Every classified failure in the access layer carries one of
/// these. If it points at the wrong place, the log line for a rejected request is useless.
///
/// **BUG THIS CATCHES**: Would catch if file/line/column extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: An ErrorLocation created on a known line
    let (location, expected_line) = (ErrorLocation::from(Location::caller()), line!());

    // THEN: Should capture this file and line
    assert!(location.file.contains("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A hand-built location
    let location = ErrorLocation {
        file: "src/transport/pipeline.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting it
    let formatted = location.to_string();

    // THEN: "[file:line:column]"
    assert_eq!(formatted, "[src/transport/pipeline.rs:42:7]");
}
