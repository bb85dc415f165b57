use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_classified_then_ranges_are_exclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode::UNAUTHORIZED.is_client_error());
    assert!(!HttpStatusCode::UNAUTHORIZED.is_server_error());

    assert!(HttpStatusCode::INTERNAL_SERVER_ERROR.is_server_error());
    assert!(!HttpStatusCode(502).is_client_error());
}

#[test]
fn given_u16_when_converted_then_round_trips_through_display() {
    let status = HttpStatusCode::from(418);

    assert_eq!(status.as_u16(), 418);
    assert_eq!(status.to_string(), "418");
}
