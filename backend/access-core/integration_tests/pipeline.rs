use crate::helpers::Fixture;

use access_core::credential::CredentialStore;
use access_core::error::ApiError;
use access_core::error::api::{NO_RESPONSE_MESSAGE, UNAUTHORIZED_MESSAGE};
use access_core::transport::RequestDescriptor;

use std::io::{Read, Write};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the bearer credential reaches a real HTTP server.
///
/// **BUG THIS CATCHES**: Would catch the reqwest transport dropping the
/// Authorization header the outgoing stage prepared.
#[tokio::test]
async fn given_credential_when_request_sent_over_http_then_server_sees_bearer_header() {
    // GIVEN: A server that only answers authenticated requests
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "ok",
            "data": { "id": 1, "username": "admin", "role": "admin" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("test-token"), "/");
    let pipeline = fixture.pipeline(&server.uri());

    // WHEN
    let data = pipeline.send(RequestDescriptor::get("/auth/me")).await.unwrap();

    // THEN
    assert_eq!(data["username"], "admin");
    assert!(fixture.notifier.messages().is_empty());
}

#[tokio::test]
async fn given_json_body_when_posted_then_server_receives_same_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "admin", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": { "access_token": "jwt", "user": { "id": 1, "username": "admin", "role": "admin" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(None, "/login");
    let client = access_core::ConsoleClient::new(fixture.pipeline(&server.uri()));

    client.auth().login("admin", "pw").await.unwrap();

    assert_eq!(fixture.credentials.get().unwrap().expose(), "jwt");
}

#[tokio::test]
async fn given_query_when_sent_then_server_receives_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deleteFile"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": { "id": 42, "filename": "a.mp4" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/material-management");
    let client = access_core::ConsoleClient::new(fixture.pipeline(&server.uri()));

    let deleted = client.materials().delete(42).await.unwrap();

    assert_eq!(deleted.filename, "a.mp4");
}

/// **VALUE**: Verifies an HTTP 200 carrying a failed envelope is rejected.
///
/// **WHY THIS MATTERS**: The backend reports most failures this way; the
/// console must show the server's text instead of treating it as success.
#[tokio::test]
async fn given_http_200_with_failed_envelope_when_sent_then_business_error_and_notification() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getFiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 500,
            "msg": "database locked",
            "data": null
        })))
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/material-management");
    let pipeline = fixture.pipeline(&server.uri());

    // WHEN
    let err = pipeline.get("/getFiles", vec![]).await.unwrap_err();

    // THEN
    assert!(matches!(err, ApiError::Business { code: Some(500), .. }));
    assert_eq!(fixture.notifier.messages(), vec!["database locked".to_string()]);
}

/// **VALUE**: Verifies the full 401 path over a real connection.
///
/// **BUG THIS CATCHES**: Would catch a transport that turns 4xx statuses into
/// transport errors, skipping the credential reset.
#[tokio::test]
async fn given_http_401_when_sent_then_credential_cleared_and_route_is_login() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/summary"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "msg": "Token expired"
        })))
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("expired"), "/data");
    let pipeline = fixture.pipeline(&server.uri());

    // WHEN
    let err = pipeline.get("/stats/summary", vec![]).await.unwrap_err();

    // THEN
    assert!(err.is_unauthorized());
    assert!(!fixture.credentials.is_authenticated());
    assert_eq!(fixture.current_route(), "/login");
    assert_eq!(fixture.notifier.messages(), vec![UNAUTHORIZED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn given_html_error_page_when_sent_then_status_still_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/");
    let pipeline = fixture.pipeline(&server.uri());

    let err = pipeline.get("/missing", vec![]).await.unwrap_err();

    assert!(matches!(err, ApiError::NotFound { .. }));
    assert!(fixture.credentials.is_authenticated());
}

/// **VALUE**: Verifies that a refused connection is a "no response" failure.
///
/// **BUG THIS CATCHES**: Would catch connection errors being mapped onto an
/// HTTP status branch or escaping as a panic.
#[tokio::test]
async fn given_unreachable_server_when_sent_then_network_connection_failed() {
    // GIVEN: A port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let fixture = Fixture::new(Some("t"), "/");
    let pipeline = fixture.pipeline(&format!("http://{address}"));

    // WHEN
    let err = pipeline.get("/getFiles", vec![]).await.unwrap_err();

    // THEN
    assert!(matches!(err, ApiError::NoResponse { .. }));
    assert_eq!(fixture.notifier.messages(), vec![NO_RESPONSE_MESSAGE.to_string()]);
    assert!(fixture.credentials.is_authenticated());
}

/// **VALUE**: Verifies a body cut off after the headers is a transport failure.
///
/// **BUG THIS CATCHES**: Would catch the transport swallowing the body read
/// error, which turns a dropped connection into a 2xx with an empty body and
/// surfaces it as a business failure.
#[tokio::test]
async fn given_body_truncated_after_headers_when_sent_then_no_response_error() {
    // GIVEN: A server that promises 500 bytes, sends a fragment and hangs up
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"code\":200,\"data\":",
            )
            .unwrap();
        stream.flush().unwrap();
    });

    let fixture = Fixture::new(Some("t"), "/data");
    let pipeline = fixture.pipeline(&format!("http://{address}"));

    // WHEN
    let err = pipeline.get("/stats/summary", vec![]).await.unwrap_err();
    server.join().unwrap();

    // THEN
    assert!(matches!(err, ApiError::NoResponse { .. }), "got {err}");
    assert_eq!(fixture.notifier.messages(), vec![NO_RESPONSE_MESSAGE.to_string()]);
    assert!(fixture.credentials.is_authenticated());
    assert_eq!(fixture.current_route(), "/data");
}
