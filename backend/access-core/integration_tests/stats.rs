use crate::helpers::Fixture;

use access_core::ConsoleClient;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn summary_body() -> serde_json::Value {
    json!({
        "code": 200,
        "msg": null,
        "data": {
            "accounts": { "total": 3, "normal": 2, "abnormal": 1 },
            "materials": { "total": 5, "total_size_mb": 120.25 },
            "publish_tasks": { "total": 4, "success": 3, "failed": 1 },
            "publish_items": { "success": 6, "failed": 1, "running": 0, "scheduled": 2 }
        }
    })
}

/// **VALUE**: Verifies dashboard reads inside the TTL never reach the server.
///
/// **BUG THIS CATCHES**: Would catch the cache being bypassed on the real
/// transport path.
#[tokio::test]
async fn given_summary_read_twice_within_ttl_when_served_then_server_hit_once() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .expect(1)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/");
    let client = ConsoleClient::new(fixture.pipeline(&server.uri()));

    // WHEN
    let first = client.stats().summary().await.unwrap();
    let second = client.stats().summary().await.unwrap();

    // THEN: expect(1) is verified when the server drops
    assert_eq!(first, second);
    assert_eq!(first.materials.total_size_mb, 120.25);
}

#[tokio::test]
async fn given_short_ttl_when_expired_then_server_hit_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/uploads_trend"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [
                { "day": "2024-05-01", "upload_count": 1, "upload_size_mb": 2.0 },
                { "day": "2024-05-02", "upload_count": 0, "upload_size_mb": 0.0 }
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let fixture = Fixture::new(Some("t"), "/");
    let client =
        ConsoleClient::new(fixture.pipeline(&server.uri())).with_cache_ttl(Duration::from_millis(100));

    let first = client.stats().uploads_trend(7).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    let second = client.stats().uploads_trend(7).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
