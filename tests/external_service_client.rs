use std::collections::BTreeMap;

use login_relay::errors::AppError;
use login_relay::services::external::ExternalServiceClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[actix_web::test]
async fn test_get_example_returns_body_unchanged() {
    let server = MockServer::start().await;
    let upstream = json!({"items": [1, 2, 3], "nested": {"ok": true}, "note": null});

    Mock::given(method("GET"))
        .and(path("/example"))
        .and(query_param("a", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ExternalServiceClient::new(server.uri());
    let mut params = BTreeMap::new();
    params.insert("a".to_string(), "1".to_string());

    let body = client.get_example(Some(&params)).await.unwrap();

    assert_eq!(body, upstream);
}

#[actix_web::test]
async fn test_get_example_without_params_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ExternalServiceClient::new(format!("{}/", server.uri()));
    let body = client.get_example(None).await.unwrap();

    assert_eq!(body, json!([]));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[actix_web::test]
async fn test_get_example_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/example"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = ExternalServiceClient::new(server.uri());
    let error = client.get_example(None).await.unwrap_err();

    match error {
        AppError::UpstreamStatus { status, detail } => {
            assert_eq!(status, 404);
            assert!(detail.contains("not found"));
        }
        other => panic!("Expected UpstreamStatus, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_get_example_redirect_is_error_and_not_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/example"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/moved"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"moved": true})))
        .expect(0)
        .mount(&server)
        .await;

    let client = ExternalServiceClient::new(server.uri());
    let error = client.get_example(None).await.unwrap_err();

    match error {
        AppError::UpstreamStatus { status, detail } => {
            assert_eq!(status, 301);
            assert!(detail.contains("301"));
        }
        other => panic!("Expected UpstreamStatus, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_get_example_non_json_body_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/example"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&server)
        .await;

    let client = ExternalServiceClient::new(server.uri());
    let error = client.get_example(None).await.unwrap_err();

    assert!(matches!(error, AppError::BadUpstreamResponse(_)));
}
