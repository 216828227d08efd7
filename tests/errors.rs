//! Tests for the structured error surface of the trait layer.
//!
//! The sentinel wrappers collapse every failure, but the traits return
//! `Result`, so callers can tell a 404 from a connection fault.

use panda_market::{Article, Get, MarketClient, MarketError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_not_found_carries_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "message": "article not found" })),
        )
        .mount(&mock_server)
        .await;

    let client = MarketClient::new(&mock_server.uri()).unwrap();
    let err = Article::get(&client, 404).await.unwrap_err();

    match err {
        MarketError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(status_code, Some(404));
            assert_eq!(message, "article not found");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_field_is_extracted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/1"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "bad request" })),
        )
        .mount(&mock_server)
        .await;

    let client = MarketClient::new(&mock_server.uri()).unwrap();
    let err = Article::get(&client, 1).await.unwrap_err();

    let display = err.to_string();
    assert!(display.contains("bad request"), "unexpected error: {display}");
}

#[tokio::test]
async fn test_empty_body_falls_back_to_status_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = MarketClient::new(&mock_server.uri()).unwrap();
    let err = Article::get(&client, 1).await.unwrap_err();

    match err {
        MarketError::ApiError {
            message,
            status_code,
        } => {
            assert_eq!(status_code, Some(503));
            assert!(message.contains("503"), "unexpected message: {message}");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_fault_is_http_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = MarketClient::new(&uri).unwrap();
    let err = Article::get(&client, 1).await.unwrap_err();

    assert!(matches!(err, MarketError::HttpError(_)));
}
