use crate::helpers::Fixture;

use access_core::ConsoleClient;
use access_core::resources::MaterialUpload;
use access_core::transport::{ProgressSink, UPLOAD_CHUNK_SIZE, UploadProgress};

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies multipart uploads stream with monotonic progress up to the total.
///
/// **WHY THIS MATTERS**: The material screen draws a progress bar from these
/// callbacks; a bar that never reaches 100% looks like a hung upload.
///
/// **BUG THIS CATCHES**: Would catch progress reported per part instead of
/// cumulatively, or the body being sent without the file bytes.
#[tokio::test]
async fn given_large_file_when_uploaded_then_progress_reaches_total_and_server_gets_parts() {
    // GIVEN: A file spanning several chunks
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/uploadSave"))
        .and(header("authorization", "Bearer t"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "msg": "File uploaded successfully",
            "data": { "filename": "promo.mp4", "filepath": "uuid_promo.mp4" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/material-management");
    let client = ConsoleClient::new(fixture.pipeline(&server.uri()));

    let size = UPLOAD_CHUNK_SIZE * 3 + 17;
    let reports: Arc<Mutex<Vec<UploadProgress>>> = Arc::default();
    let sink = {
        let reports = reports.clone();
        ProgressSink::new(move |progress| reports.lock().unwrap().push(progress))
    };
    let upload = MaterialUpload {
        file_name: "clip.mp4".to_string(),
        mime: Some("video/mp4".to_string()),
        bytes: vec![7u8; size],
        custom_name: Some("promo".to_string()),
    };

    // WHEN
    let stored = client.materials().upload(upload, Some(sink)).await.unwrap();

    // THEN: Server response decoded
    assert_eq!(stored.filepath, "uuid_promo.mp4");

    // THEN: Progress is cumulative and ends at the total
    let reports = reports.lock().unwrap().clone();
    assert_eq!(reports.len(), 4);
    assert!(reports.windows(2).all(|w| w[0].loaded <= w[1].loaded));
    let last = reports.last().unwrap();
    assert_eq!(last.loaded, size as u64);
    assert_eq!(last.total, size as u64);
    assert_eq!(last.percent(), 100);

    // THEN: Multipart body carries both fields
    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"clip.mp4\""));
    assert!(body.contains("name=\"filename\""));
    assert!(body.contains("promo"));
}

#[tokio::test]
async fn given_invalid_mime_when_uploaded_then_request_error_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/material-management");
    let client = ConsoleClient::new(fixture.pipeline(&server.uri()));
    let upload = MaterialUpload {
        file_name: "a.bin".to_string(),
        mime: Some("not a mime".to_string()),
        bytes: vec![1],
        custom_name: None,
    };

    let err = client.materials().upload(upload, None).await.unwrap_err();

    assert_eq!(err.category(), "request");
    assert_eq!(fixture.notifier.messages().len(), 1);
}
